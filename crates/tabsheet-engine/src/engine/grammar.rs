//! Formula grammar.
//!
//! Cell contents are recognised by a small hand-written scanner rather than
//! regular expressions:
//!
//! ```text
//! content  ::= "=" number | "=" cell | formula | <anything else, kept as text>
//! formula  ::= "=" call                      (call name must be a known function)
//! call     ::= [A-Z]+ "(" operand ( " "* "," " "* operand )* ")"
//! operand  ::= number | cell
//! number   ::= "0" | "-"? "0." [0-9]* | "-"? [1-9] [0-9]* ( "." [0-9]* )?
//! cell     ::= [A-Z]+ [1-9] [0-9]*
//! ```
//!
//! Arity is data attached to [`Function`], checked after the call shape parses.

use std::fmt;

use super::cell_ref::CellAddress;

/// The fixed set of formula functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Function {
    Add,
    Multiply,
    Subtract,
    Divide,
    Mod,
}

pub const FUNCTIONS: [Function; 5] = [
    Function::Add,
    Function::Multiply,
    Function::Subtract,
    Function::Divide,
    Function::Mod,
];

impl Function {
    pub fn from_name(name: &str) -> Option<Function> {
        FUNCTIONS.into_iter().find(|f| f.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Function::Add => "ADD",
            Function::Multiply => "MULTIPLY",
            Function::Subtract => "SUBTRACT",
            Function::Divide => "DIVIDE",
            Function::Mod => "MOD",
        }
    }

    pub fn arity(self) -> Arity {
        match self {
            Function::Add | Function::Multiply => Arity::AtLeast(2),
            Function::Subtract | Function::Divide | Function::Mod => Arity::Exactly(2),
        }
    }

    /// The binary operation folded left-to-right over the operands.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Function::Add => lhs + rhs,
            Function::Multiply => lhs * rhs,
            Function::Subtract => lhs - rhs,
            Function::Divide => lhs / rhs,
            Function::Mod => floored_rem(lhs, rhs),
        }
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Remainder whose sign follows the divisor.
fn floored_rem(lhs: f64, rhs: f64) -> f64 {
    let rem = lhs % rhs;
    if rem != 0.0 && (rem < 0.0) != (rhs < 0.0) {
        rem + rhs
    } else {
        rem
    }
}

/// Argument count class of a function.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    AtLeast(usize),
    Exactly(usize),
}

impl Arity {
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::AtLeast(min) => count >= min,
            Arity::Exactly(n) => count == n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::AtLeast(min) => write!(f, "at least {}", min),
            Arity::Exactly(n) => write!(f, "{}", n),
        }
    }
}

/// A single formula argument. Cell operands keep the text they were written as.
#[derive(Clone, Debug, PartialEq)]
pub enum Operand {
    Number(f64),
    Cell { address: CellAddress, text: String },
}

/// A structurally valid call whose name has not been checked against [`FUNCTIONS`].
#[derive(Clone, Debug, PartialEq)]
pub struct Call<'a> {
    pub name: &'a str,
    pub operands: Vec<Operand>,
}

impl<'a> Call<'a> {
    /// Parse `NAME(operand, ...)` as a whole-string match. `expr` excludes the leading `=`.
    pub fn parse(expr: &'a str) -> Option<Call<'a>> {
        let mut scanner = Scanner::new(expr);
        let name = scanner.eat_while(|b| b.is_ascii_uppercase());
        if name.is_empty() || !scanner.eat(b'(') {
            return None;
        }

        let mut operands = vec![scanner.operand()?];
        while scanner.separator() {
            operands.push(scanner.operand()?);
        }

        if scanner.eat(b')') && scanner.at_end() {
            Some(Call { name, operands })
        } else {
            None
        }
    }
}

/// A formula with a known function and an operand count its arity accepts.
#[derive(Clone, Debug, PartialEq)]
pub struct Formula {
    pub function: Function,
    pub operands: Vec<Operand>,
}

impl Formula {
    /// Parse raw cell content (including the leading `=`).
    pub fn parse(raw: &str) -> Option<Formula> {
        let call = Call::parse(raw.strip_prefix('=')?)?;
        let function = Function::from_name(call.name)?;
        function.arity().accepts(call.operands.len()).then_some(Formula {
            function,
            operands: call.operands,
        })
    }
}

/// The shape of a raw cell string, as far as evaluation is concerned.
#[derive(Clone, Debug, PartialEq)]
pub enum Content<'a> {
    /// `=NUMBER`
    Number(f64),
    /// `=CELL`
    Reference { address: CellAddress, text: &'a str },
    Formula(Formula),
    /// Anything else, including empty strings and malformed formulas.
    Text(&'a str),
}

impl<'a> Content<'a> {
    pub fn classify(raw: &'a str) -> Content<'a> {
        let Some(body) = raw.strip_prefix('=') else {
            return Content::Text(raw);
        };
        if let Some(n) = parse_number(body) {
            return Content::Number(n);
        }
        if let Ok(address) = CellAddress::parse(body) {
            return Content::Reference {
                address,
                text: body,
            };
        }
        match Formula::parse(raw) {
            Some(formula) => Content::Formula(formula),
            None => Content::Text(raw),
        }
    }
}

/// Whole-string NUMBER match.
pub fn is_number(text: &str) -> bool {
    let mut scanner = Scanner::new(text);
    scanner.number().is_some() && scanner.at_end()
}

/// Parse a whole-string NUMBER literal.
pub fn parse_number(text: &str) -> Option<f64> {
    if is_number(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// Byte cursor over ASCII grammar tokens. Every token it consumes is ASCII,
/// so slicing at `pos` is always on a char boundary.
pub(crate) struct Scanner<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Scanner { src, pos: 0 }
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos == self.src.len()
    }

    fn peek(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, b: u8) -> bool {
        if self.peek() == Some(b) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    pub(crate) fn number(&mut self) -> Option<&'a str> {
        let start = self.pos;
        if self.number_body() {
            Some(&self.src[start..self.pos])
        } else {
            self.pos = start;
            None
        }
    }

    fn number_body(&mut self) -> bool {
        let negative = self.eat(b'-');
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                if self.eat(b'.') {
                    self.eat_while(|b| b.is_ascii_digit());
                    true
                } else {
                    // "-0" is not a number
                    !negative
                }
            }
            Some(b'1'..=b'9') => {
                self.eat_while(|b| b.is_ascii_digit());
                if self.eat(b'.') {
                    self.eat_while(|b| b.is_ascii_digit());
                }
                true
            }
            _ => false,
        }
    }

    pub(crate) fn cell(&mut self) -> Option<(CellAddress, &'a str)> {
        let start = self.pos;
        let letters = self.eat_while(|b| b.is_ascii_uppercase());
        if letters.is_empty() || !matches!(self.peek(), Some(b'1'..=b'9')) {
            self.pos = start;
            return None;
        }
        let digits = self.eat_while(|b| b.is_ascii_digit());
        let address = CellAddress::from_parts(letters, digits);
        Some((address, &self.src[start..self.pos]))
    }

    fn operand(&mut self) -> Option<Operand> {
        if let Some(text) = self.number() {
            return Some(Operand::Number(text.parse().unwrap_or(0.0)));
        }
        self.cell().map(|(address, text)| Operand::Cell {
            address,
            text: text.to_string(),
        })
    }

    fn separator(&mut self) -> bool {
        let start = self.pos;
        self.eat_while(|b| b == b' ');
        if self.eat(b',') {
            self.eat_while(|b| b == b' ');
            true
        } else {
            self.pos = start;
            false
        }
    }
}
