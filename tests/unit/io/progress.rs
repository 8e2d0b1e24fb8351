//! Tests for frame progress tracking

#[cfg(test)]
mod tests {
    use convviz::geometry::AnimationStep;
    use convviz::io::progress::FrameProgress;

    // Tests hidden bars still count frames
    // Verified by skipping inc on hidden bars
    #[test]
    fn test_hidden_progress_counts() {
        let progress = FrameProgress::hidden(3);
        progress.advance(AnimationStep::ORIGIN);
        progress.advance(AnimationStep::new(1, 0, 0));
        assert_eq!(progress.position(), 2);
        progress.finish();
    }

    // Tests visible bars advance and finish without panicking
    // Verified by using an invalid template without fallback
    #[test]
    fn test_visible_progress() {
        let progress = FrameProgress::new(2, "rendering");
        progress.advance(AnimationStep::ORIGIN);
        assert_eq!(progress.position(), 1);
        progress.finish();
    }
}
