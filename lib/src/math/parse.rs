use std::{fmt::Display, str::FromStr};

use crate::error::ComplexError;

use super::{Component, ComplexValue};

/// Accepts the rendered form (`2 - 1j`, `3j`), a comma pair (`2,-1`) or a plain real (`2`)
impl<T> FromStr for ComplexValue<T>
where
    T: Component,
    <T as FromStr>::Err: Display,
{
    type Err = ComplexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (real, imag) = if let Some((real, imag)) = input.split_once(',') {
            (Some(compact_sign(real)), Some(compact_sign(imag)))
        } else if let Some(body) = input.strip_suffix('j') {
            match separator(body) {
                Some(at) => (
                    Some(compact_sign(&body[..at])),
                    Some(compact_sign(&body[at..])),
                ),
                None => (None, Some(compact_sign(body))),
            }
        } else {
            (Some(compact_sign(input)), None)
        };

        let real = real
            .map(|text| component(s, &text))
            .transpose()?
            .unwrap_or_else(T::zero);
        let imag = imag
            .map(|text| component(s, &text))
            .transpose()?
            .unwrap_or_else(T::zero);
        ComplexValue::new(real, imag)
    }
}

fn component<T>(input: &str, text: &str) -> Result<T, ComplexError>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    text.parse().map_err(|err| ComplexError::Parse {
        input: input.to_owned(),
        reason: format!("invalid number `{text}`: {err}"),
    })
}

/// Byte offset of the sign between real and imaginary parts. Signs of exponents are skipped.
fn separator(body: &str) -> Option<usize> {
    body.char_indices()
        .filter(|&(i, ch)| i > 0 && (ch == '+' || ch == '-'))
        .filter(|&(i, _)| !body[..i].ends_with(|ch| ch == 'e' || ch == 'E'))
        .map(|(i, _)| i)
        .last()
}

/// `- 1` -> `-1`
fn compact_sign(text: &str) -> String {
    let text = text.trim();
    match text.chars().next() {
        Some(sign @ ('+' | '-')) => format!("{sign}{}", text[1..].trim_start()),
        _ => text.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::ComplexError, math::ComplexValue};

    fn parse(s: &str) -> (f64, f64) {
        s.parse::<ComplexValue>().unwrap().components()
    }

    #[test]
    fn rendered_form() {
        assert_eq!(parse("2 - 1j"), (2., -1.));
        assert_eq!(parse("2 + 2j"), (2., 2.));
        assert_eq!(parse("-1-1j"), (-1., -1.));
        assert_eq!(parse("0.5 +0.25j"), (0.5, 0.25));
        assert_eq!(parse("1e-3+2E+1j"), (0.001, 20.));
        assert_eq!(parse("2 - 1e-3j"), (2., -0.001));
    }

    #[test]
    fn imaginary_only() {
        assert_eq!(parse("3j"), (0., 3.));
        assert_eq!(parse("-2.5j"), (0., -2.5));
        assert_eq!(parse("- 2.5j"), (0., -2.5));
    }

    #[test]
    fn pair_and_real() {
        assert_eq!(parse("2,-1"), (2., -1.));
        assert_eq!(parse(" 2 , - 1 "), (2., -1.));
        assert_eq!(parse("1.5"), (1.5, 0.));
        assert_eq!(parse("-4"), (-4., 0.));
    }

    #[test]
    fn f32() {
        let value: ComplexValue<f32> = "1.5 - 2j".parse().unwrap();
        assert_eq!(value.components(), (1.5_f32, -2.));
    }

    #[test]
    fn rendering_parses_back() {
        for (real, imag) in [(2., -1.), (2., 2.), (-0.5, 1e-9), (123.25, -7.), (3., 0.)] {
            let value = ComplexValue::new(real, imag).unwrap();
            let parsed: ComplexValue = value.to_string().parse().unwrap();
            assert!(parsed.identical(&value), "{value} parsed as {parsed:?}");
        }
    }

    #[test]
    fn malformed() {
        for input in ["", "abc", "2 + j", "1,2,3", "2 - 1i", "j"] {
            assert!(
                matches!(
                    input.parse::<ComplexValue>(),
                    Err(ComplexError::Parse { .. })
                ),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn non_finite() {
        for input in ["inf,0", "NaN", "1 + infj"] {
            assert!(matches!(
                input.parse::<ComplexValue>(),
                Err(ComplexError::NonFinite { .. })
            ));
        }
    }
}
