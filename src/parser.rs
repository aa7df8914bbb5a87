use num_bigint::BigInt;
use num_traits::Num;

/// Splits a line into whitespace separated decimal integers.
/// Every token that is not an integer is returned as an `Err` carrying the token text.
pub fn parse_ints(line: &[u8]) -> impl Iterator<Item = Result<BigInt, String>> {
    IntParser::new(line)
}

struct IntParser<'a> {
    line: &'a [u8],
}

impl<'a> IntParser<'a> {
    fn new(line: &'a [u8]) -> Self {
        Self { line }
    }
}

impl<'a> Iterator for IntParser<'a> {
    type Item = Result<BigInt, String>;

    fn next(&mut self) -> Option<Self::Item> {
        use State::*;
        let mut state = LookingForToken(0);
        while !self.line.is_empty() {
            state = match state {
                LookingForToken(i) => {
                    // end of line special case
                    if i == self.line.len() {
                        self.line = &[];
                        continue;
                    }
                    if self.line[i].is_ascii_whitespace() {
                        LookingForToken(i + 1)
                    } else {
                        ParsingToken(i, i + 1)
                    }
                }
                ParsingToken(start, i) => {
                    if i == self.line.len() || self.line[i].is_ascii_whitespace() {
                        let token = &self.line[start..i];
                        self.line = &self.line[i..];
                        return Some(parse_token(token));
                    }
                    ParsingToken(start, i + 1)
                }
            }
        }
        None
    }
}

fn parse_token(token: &[u8]) -> Result<BigInt, String> {
    let s = String::from_utf8_lossy(token);
    // from_str_radix would also accept `_` separators
    if !is_decimal(token) {
        return Err(s.into_owned());
    }
    BigInt::from_str_radix(&s, 10).map_err(|_| s.into_owned())
}

fn is_decimal(token: &[u8]) -> bool {
    let digits = match token {
        [b'+' | b'-', rest @ ..] => rest,
        _ => token,
    };
    !digits.is_empty() && digits.iter().all(u8::is_ascii_digit)
}

#[derive(Debug, Copy, Clone)]
enum State {
    LookingForToken(usize),
    ParsingToken(usize, usize),
}
