//! Numeric list scanning shared by the transform and path-data parsers.

/// Extracts every leading run of floating-point numbers from `s`, skipping
/// spaces, commas and newlines between them. Scanning stops at the first
/// token that is neither a separator nor a number, so trailing junk (e.g. a
/// closing parenthesis from a greedy regex capture) is simply ignored.
pub fn scan_number_list(s: &str) -> Vec<f64> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    loop {
        while i < bytes.len() && is_separator(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }
        match scan_number(s, i) {
            Some((value, next)) => {
                out.push(value);
                i = next;
            }
            None => break,
        }
    }

    out
}

fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b',' | b'\n')
}

/// Scans one maximal float token starting at `start`. Returns the decoded
/// value and the index one past the token, or `None` if no number starts
/// there.
fn scan_number(s: &str, start: usize) -> Option<(f64, usize)> {
    let bytes = s.as_bytes();
    let mut i = start;

    if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
        i += 1;
    }

    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut has_digits = i > int_start;

    if i < bytes.len() && bytes[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > frac_start {
            has_digits = true;
            i = j;
        } else if has_digits {
            // trailing dot as in "5." still parses
            i += 1;
        }
    }

    if !has_digits {
        return None;
    }

    // Optional exponent; only consumed when followed by at least one digit,
    // otherwise a bare `e` ends the token instead of invalidating it.
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    s[start..i].parse::<f64>().ok().map(|value| (value, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_separated_numbers() {
        assert_eq!(scan_number_list("1,2 3\n4"), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn accepts_signs_and_decimals() {
        assert_eq!(scan_number_list("-.5 .25 +3."), vec![-0.5, 0.25, 3.0]);
    }

    #[test]
    fn stops_at_first_junk_token() {
        assert_eq!(scan_number_list("1 2 x 3"), vec![1.0, 2.0]);
        assert_eq!(scan_number_list("1,2,3,4,5,6) translate(7,8"), vec![
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0
        ]);
    }

    #[test]
    fn empty_and_junk_only_inputs_yield_nothing() {
        assert_eq!(scan_number_list(""), Vec::<f64>::new());
        assert_eq!(scan_number_list(" , \n"), Vec::<f64>::new());
        assert_eq!(scan_number_list("abc"), Vec::<f64>::new());
    }

    #[test]
    fn exponent_forms_decode() {
        assert_eq!(scan_number_list("1e3 2.5e-1"), vec![1000.0, 0.25]);
    }

    #[test]
    fn double_dot_splits_into_two_tokens() {
        // "5.5.5" scans as 5.5 followed by .5
        assert_eq!(scan_number_list("5.5.5"), vec![5.5, 0.5]);
    }
}
