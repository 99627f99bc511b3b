#[derive(Clone, Copy, Debug, PartialEq)]
enum Number {
    Int(u64),
    Float { value: f64, decimals: usize },
}

fn parse_number(digits: &str) -> Option<Number> {
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if is_digits(digits) {
        return digits.parse().ok().map(Number::Int);
    }
    let (int_part, frac_part) = digits.split_once('.')?;
    if is_digits(int_part) && is_digits(frac_part) {
        let value = digits.parse().ok()?;
        return Some(Number::Float { value, decimals: frac_part.len() });
    }
    None
}

/// Inserts a comma between every group of three integer digits.
pub fn group_thousands(number: &str) -> String {
    let (int_part, rest) = match number.find('.') {
        Some(idx) => number.split_at(idx),
        None => (number, ""),
    };
    let mut grouped = String::with_capacity(number.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.push_str(rest);
    grouped
}

/// Text for each frame of a counter counting up to `target`.
///
/// Frame `i` of `frames` shows `target * i / frames` with the target's
/// decimal places and thousands separators; the last frame is `target`
/// verbatim. Returns `None` when `target` is not a plain number.
pub fn counter_frames(target: &str, frames: u32) -> Option<Vec<String>> {
    let trimmed = target.trim();
    let uses_commas = trimmed.contains(',');
    let number = parse_number(&trimmed.replace(',', ""))?;
    let frames = frames.max(1);

    let mut out: Vec<String> = (1..frames)
        .map(|i| {
            let text = match number {
                Number::Int(value) => {
                    (value as u128 * i as u128 / frames as u128).to_string()
                }
                Number::Float { value, decimals } => {
                    format!("{:.*}", decimals, value * i as f64 / frames as f64)
                }
            };
            if uses_commas {
                group_thousands(&text)
            } else {
                text
            }
        })
        .collect();
    out.push(target.to_string());
    Some(out)
}

/// What a counter shows: its own text until it has been seen, then the
/// current frame.
pub fn displayed_text(frames: Option<&[String]>, frame: Option<usize>, target: &str) -> String {
    match (frames, frame) {
        (Some(frames), Some(i)) if !frames.is_empty() => frames[i.min(frames.len() - 1)].clone(),
        _ => target.to_string(),
    }
}

pub fn frame_count(time_ms: u32, delay_ms: u32) -> u32 {
    if delay_ms == 0 {
        return 1;
    }
    (time_ms / delay_ms).max(1)
}

/// True once an element's top edge has come above the bottom of the viewport.
pub fn is_in_view(element_top: f64, viewport_height: f64) -> bool {
    element_top < viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_counter_counts_up() {
        let frames = counter_frames("250", 100).unwrap();
        assert_eq!(frames.len(), 100);
        assert_eq!(frames[0], "2");
        assert_eq!(frames[49], "125");
        assert_eq!(frames[99], "250");
    }

    #[test]
    fn separators_are_kept() {
        let frames = counter_frames("1,250", 100).unwrap();
        assert_eq!(frames[0], "12");
        assert_eq!(frames[79], "1,000");
        assert_eq!(frames.last().unwrap(), "1,250");
    }

    #[test]
    fn decimals_are_kept() {
        let frames = counter_frames("4.50", 10).unwrap();
        assert_eq!(frames[0], "0.45");
        assert_eq!(frames[4], "2.25");
        assert_eq!(frames[9], "4.50");

        let frames = counter_frames("12,500.4", 2).unwrap();
        assert_eq!(frames, vec!["6,250.2".to_string(), "12,500.4".to_string()]);
    }

    #[test]
    fn non_numeric_text_is_left_alone() {
        assert_eq!(counter_frames("24/7", 100), None);
        assert_eq!(counter_frames("", 100), None);
        assert_eq!(counter_frames("1.2.3", 100), None);
    }

    #[test]
    fn target_text_shows_until_counter_starts() {
        let frames = counter_frames("1,250", 100).unwrap();
        assert_eq!(displayed_text(Some(frames.as_slice()), None, "1,250"), "1,250");
        assert_eq!(displayed_text(Some(frames.as_slice()), Some(0), "1,250"), "12");
        assert_eq!(displayed_text(Some(frames.as_slice()), Some(500), "1,250"), "1,250");
        assert_eq!(displayed_text(None, Some(3), "24/7"), "24/7");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("1234567"), "1,234,567");
        assert_eq!(group_thousands("1000.25"), "1,000.25");
    }

    #[test]
    fn timing_and_view() {
        assert_eq!(frame_count(1000, 10), 100);
        assert_eq!(frame_count(1000, 0), 1);
        assert!(is_in_view(700.0, 800.0));
        assert!(!is_in_view(900.0, 800.0));
    }
}
