//! Tests for animation capture and GIF export

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::BufReader;

    use convviz::ConvVizError;
    use convviz::geometry::{AnimationStep, Padding, Parameters};
    use convviz::io::progress::FrameProgress;
    use convviz::io::visualization::AnimationCapture;
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;

    fn count_gif_frames(path: &std::path::Path) -> Option<usize> {
        let file = File::open(path).ok()?;
        let decoder = GifDecoder::new(BufReader::new(file)).ok()?;
        Some(decoder.into_frames().count())
    }

    // Tests a full cycle captures every step in raster order
    // Verified by capturing one filter only
    #[test]
    fn test_full_cycle() {
        let parameters = Parameters::clamped(4, 1, 2, 2, 1, 1, Padding::Valid);
        let capture = AnimationCapture::full_cycle(parameters);
        assert!(capture.is_ok());
        if let Ok(capture) = capture {
            assert_eq!(capture.frame_count(), 18);
            assert_eq!(capture.steps().first(), Some(&AnimationStep::ORIGIN));
            assert_eq!(capture.steps().last(), Some(&AnimationStep::new(2, 2, 1)));
        }
    }

    // Tests invalid parameters cannot be captured
    // Verified by returning an empty capture
    #[test]
    fn test_full_cycle_invalid() {
        let parameters = Parameters::clamped(1, 1, 8, 1, 1, 1, Padding::Valid);
        assert!(matches!(
            AnimationCapture::full_cycle(parameters),
            Err(ConvVizError::InvalidGeometry { .. })
        ));
    }

    // Tests one GIF frame per step at the tick delay
    // Verified by skipping the first frame
    #[test]
    fn test_export_gif_frames() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("anim.gif");
        let parameters = Parameters::clamped(3, 1, 2, 1, 1, 1, Padding::Valid);
        let capture = AnimationCapture::full_cycle(parameters);
        assert!(capture.is_ok());
        if let Ok(capture) = capture {
            assert_eq!(capture.exported_frame_count(1000), 4);
            let progress = FrameProgress::hidden(4);
            let result = capture.export_gif(&path, 1000, Some(&progress));
            assert!(result.is_ok(), "export failed: {result:?}");
            assert_eq!(progress.position(), 4);
            assert_eq!(count_gif_frames(&path), Some(4));
        }
    }

    // Tests delays below the viewer minimum skip frames
    // Verified by keeping every frame at the minimum delay
    #[test]
    fn test_export_gif_skips_fast_frames() {
        let Ok(dir) = tempfile::tempdir() else {
            return;
        };
        let path = dir.path().join("fast.gif");
        let parameters = Parameters::clamped(5, 1, 2, 1, 1, 1, Padding::Valid);
        let capture = AnimationCapture::full_cycle(parameters);
        assert!(capture.is_ok());
        if let Ok(capture) = capture {
            // 16 steps at 10ms with a 50ms minimum keeps every 5th step
            assert_eq!(capture.exported_frame_count(10), 4);
            let result = capture.export_gif(&path, 10, None);
            assert!(result.is_ok());
            assert_eq!(count_gif_frames(&path), Some(4));
        }
    }
}
