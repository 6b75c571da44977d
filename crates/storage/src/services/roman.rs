const NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Renders `value` in subtractive Roman notation.
///
/// Only 1..=3999 can be written with the standard symbols; anything else
/// yields an empty string.
pub fn to_roman(value: i32) -> String {
    if !(1..=3999).contains(&value) {
        return String::new();
    }

    let mut remainder = value.unsigned_abs();
    let mut roman = String::new();
    for (weight, symbol) in NUMERALS {
        while remainder >= weight {
            roman.push_str(symbol);
            remainder -= weight;
        }
    }

    roman
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol_value(symbol: char) -> i32 {
        match symbol {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            other => panic!("unexpected symbol {other}"),
        }
    }

    fn from_roman(roman: &str) -> i32 {
        let values: Vec<i32> = roman.chars().map(symbol_value).collect();
        values
            .iter()
            .enumerate()
            .map(|(idx, &value)| match values.get(idx + 1) {
                Some(&next) if next > value => -value,
                _ => value,
            })
            .sum()
    }

    #[test]
    fn test_known_values() {
        assert_eq!(to_roman(1), "I");
        assert_eq!(to_roman(4), "IV");
        assert_eq!(to_roman(9), "IX");
        assert_eq!(to_roman(14), "XIV");
        assert_eq!(to_roman(40), "XL");
        assert_eq!(to_roman(90), "XC");
        assert_eq!(to_roman(400), "CD");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(to_roman(3999), "MMMCMXCIX");
    }

    #[test]
    fn test_out_of_range_is_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(-3), "");
        assert_eq!(to_roman(4000), "");
        assert_eq!(to_roman(i32::MAX), "");
    }

    #[test]
    fn test_round_trip_full_range() {
        for value in 1..=3999 {
            assert_eq!(from_roman(&to_roman(value)), value, "value {value}");
        }
    }
}
