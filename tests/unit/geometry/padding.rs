//! Tests for padding modes and the SAME padding split

#[cfg(test)]
mod tests {
    use convviz::geometry::padding::{Padding, compute_padding, filter_spread};

    // Tests dilation inserts gaps between taps only
    // Verified by counting a gap after the last tap
    #[test]
    fn test_filter_spread() {
        assert_eq!(filter_spread(2, 1), 2);
        assert_eq!(filter_spread(3, 2), 5);
        assert_eq!(filter_spread(1, 8), 1);
        assert_eq!(filter_spread(8, 8), 57);
    }

    // Tests VALID never pads
    // Verified by reusing the SAME branch
    #[test]
    fn test_valid_has_no_padding() {
        for input in 1..=8 {
            for spread in 1..=20 {
                for stride in 1..=8 {
                    assert_eq!(compute_padding(input, spread, stride, Padding::Valid), (0, 0));
                }
            }
        }
    }

    // Tests the documented 4/2/1 example
    // Verified by splitting the odd cell to the start
    #[test]
    fn test_same_puts_odd_cell_at_end() {
        assert_eq!(compute_padding(4, 2, 1, Padding::Same), (0, 1));
        assert_eq!(compute_padding(8, 4, 1, Padding::Same), (1, 2));
        assert_eq!(compute_padding(5, 3, 1, Padding::Same), (1, 1));
    }

    // Tests remainder handling when the input divides by the stride
    // Verified by using the zero remainder directly
    #[test]
    fn test_same_with_divisible_input_uses_stride() {
        // 4 % 2 == 0, so the stride is subtracted: 3 - 2 = 1
        assert_eq!(compute_padding(4, 3, 2, Padding::Same), (0, 1));
        // 5 % 2 == 1: 3 - 1 = 2
        assert_eq!(compute_padding(5, 3, 2, Padding::Same), (1, 1));
    }

    // Tests negative totals clamp to zero
    // Verified by removing the saturation
    #[test]
    fn test_same_never_negative() {
        assert_eq!(compute_padding(4, 1, 4, Padding::Same), (0, 0));
        assert_eq!(compute_padding(7, 2, 8, Padding::Same), (0, 0));
    }

    // Tests parsing is case-insensitive and rejects other names
    // Verified by matching case-sensitively
    #[test]
    fn test_padding_parse_and_display() {
        assert_eq!("same".parse::<Padding>().ok(), Some(Padding::Same));
        assert_eq!("VALID".parse::<Padding>().ok(), Some(Padding::Valid));
        assert!("full".parse::<Padding>().is_err());
        assert_eq!(Padding::Same.to_string(), "SAME");
        assert_eq!(Padding::default(), Padding::Valid);
    }
}
