//! Grammar registry: symbol definitions keyed by symbol id.
//!
//! Each symbol carries a left binding power and up to three behaviors:
//! a `nud` (what it means at the start of an expression), a `led` (what it
//! means after a left operand) and a `std` (what it means at the start of a
//! statement). Behaviors are plain data interpreted by the parser.
//!
//! A [`GrammarBuilder`] collects definitions; [`GrammarBuilder::build`]
//! freezes them into an immutable [`Grammar`] that can be shared across
//! threads. [`Grammar::quakec`] is the process-wide QuakeC grammar.

use std::sync::OnceLock;

use qc_ir::{BinaryOp, Token, TokenKind, UnaryOp};
use rustc_hash::FxHashMap;
use tracing::debug;

/// Null denotation: behavior at the start of an expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Nud {
    /// Number, string or vector literal.
    Literal,
    /// Variable reference.
    Name,
    /// Prefix operator; the operand is parsed at `bp`.
    Prefix { op: UnaryOp, bp: u32 },
    /// `( expr )`
    Group,
}

/// Left denotation: behavior after a left operand.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Led {
    /// Left-associative; right operand parsed at `bp`.
    Infix { op: BinaryOp, bp: u32 },
    /// Right-associative; right operand parsed at `bp - 1`.
    InfixRight { op: BinaryOp, bp: u32 },
    /// Assignment, optionally compound (`+=`). Right-associative.
    Assign { bp: u32, compound: Option<BinaryOp> },
    /// `object.field`
    Member,
    /// `callee(args...)`
    Call,
}

/// Statement denotation: behavior at the start of a statement.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Std {
    Block,
    /// Global or field declaration, started by a type keyword or `.`
    Declaration,
    /// `local type name ...;`
    Local,
    If,
    While,
    DoWhile,
    Return,
    /// A lone `;`
    Empty,
}

/// One registered symbol.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SymbolDef {
    id: String,
    lbp: u32,
    nud: Option<Nud>,
    led: Option<Led>,
    std: Option<Std>,
}

impl SymbolDef {
    fn new(id: &str, lbp: u32) -> Self {
        SymbolDef {
            id: id.to_string(),
            lbp,
            nud: None,
            led: None,
            std: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Left binding power; 0 for symbols that never bind to the left.
    #[inline]
    pub fn lbp(&self) -> u32 {
        self.lbp
    }

    #[inline]
    pub fn nud(&self) -> Option<Nud> {
        self.nud
    }

    #[inline]
    pub fn led(&self) -> Option<Led> {
        self.led
    }

    #[inline]
    pub fn std(&self) -> Option<Std> {
        self.std
    }

    pub fn set_nud(&mut self, nud: Nud) -> &mut Self {
        self.nud = Some(nud);
        self
    }

    pub fn set_led(&mut self, led: Led) -> &mut Self {
        self.led = Some(led);
        self
    }

    pub fn set_std(&mut self, std: Std) -> &mut Self {
        self.std = Some(std);
        self
    }
}

/// Mutable grammar under construction.
#[derive(Clone, Debug, Default)]
pub struct GrammarBuilder {
    symbols: FxHashMap<String, SymbolDef>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        GrammarBuilder::default()
    }

    /// Get or create the definition for `id`.
    ///
    /// Re-registering keeps existing behaviors and raises the binding power
    /// to the larger of the old and new values.
    pub fn register(&mut self, id: &str, bp: u32) -> &mut SymbolDef {
        let def = self
            .symbols
            .entry(id.to_string())
            .or_insert_with(|| SymbolDef::new(id, bp));
        def.lbp = def.lbp.max(bp);
        def
    }

    /// Left-associative binary operator.
    pub fn infix(&mut self, id: &str, bp: u32, op: BinaryOp) -> &mut SymbolDef {
        self.register(id, bp).set_led(Led::Infix { op, bp })
    }

    /// Right-associative binary operator.
    pub fn infix_right(&mut self, id: &str, bp: u32, op: BinaryOp) -> &mut SymbolDef {
        self.register(id, bp).set_led(Led::InfixRight { op, bp })
    }

    /// Prefix operator. Registered with binding power 0 so a symbol that is
    /// also infix keeps its infix binding power.
    pub fn prefix(&mut self, id: &str, bp: u32, op: UnaryOp) -> &mut SymbolDef {
        self.register(id, 0).set_nud(Nud::Prefix { op, bp })
    }

    /// Assignment operator; `compound` is the arithmetic of `op=` forms.
    pub fn assignment(
        &mut self,
        id: &str,
        bp: u32,
        compound: Option<BinaryOp>,
    ) -> &mut SymbolDef {
        self.register(id, bp).set_led(Led::Assign { bp, compound })
    }

    /// Field access through `.`.
    pub fn member_access(&mut self, bp: u32) -> &mut SymbolDef {
        self.register(".", bp).set_led(Led::Member)
    }

    /// Function call through `(`.
    pub fn call(&mut self, bp: u32) -> &mut SymbolDef {
        self.register("(", bp).set_led(Led::Call)
    }

    /// Parenthesised expression through `(`.
    pub fn group(&mut self) -> &mut SymbolDef {
        self.register("(", 0).set_nud(Nud::Group)
    }

    pub fn literal(&mut self) -> &mut SymbolDef {
        self.register(LITERAL, 0).set_nud(Nud::Literal)
    }

    pub fn name(&mut self) -> &mut SymbolDef {
        self.register(NAME, 0).set_nud(Nud::Name)
    }

    /// Attach a statement behavior.
    pub fn stmt(&mut self, id: &str, std: Std) -> &mut SymbolDef {
        self.register(id, 0).set_std(std)
    }

    /// Reserve an identifier so it is looked up by its own id instead of as
    /// a name.
    pub fn keyword(&mut self, id: &str) -> &mut SymbolDef {
        self.register(id, 0)
    }

    pub fn build(self) -> Grammar {
        Grammar {
            symbols: self.symbols,
        }
    }
}

/// Symbol id for all literal tokens.
pub const LITERAL: &str = "(literal)";
/// Symbol id for identifiers that are not keywords.
pub const NAME: &str = "(name)";
/// Symbol id for type keywords.
pub const TYPE: &str = "(type)";
/// Symbol id for end of input.
pub const END: &str = "(end)";

/// Immutable symbol table.
#[derive(Clone, Debug)]
pub struct Grammar {
    symbols: FxHashMap<String, SymbolDef>,
}

static QUAKEC: OnceLock<Grammar> = OnceLock::new();

impl Grammar {
    /// The QuakeC grammar, built on first use.
    pub fn quakec() -> &'static Grammar {
        QUAKEC.get_or_init(|| {
            let grammar = quakec_builder().build();
            debug!(symbols = grammar.len(), "built QuakeC grammar");
            grammar
        })
    }

    pub fn get(&self, id: &str) -> Option<&SymbolDef> {
        self.symbols.get(id)
    }

    /// The symbol id a token is looked up under.
    pub fn key_for<'t>(&self, token: &'t Token) -> &'t str {
        match token.kind {
            TokenKind::Eof => END,
            TokenKind::Operator => &token.lexeme,
            TokenKind::Identifier if self.symbols.contains_key(&token.lexeme) => &token.lexeme,
            TokenKind::Identifier => NAME,
            TokenKind::TypeKeyword => TYPE,
            TokenKind::Number | TokenKind::String | TokenKind::Vector => LITERAL,
        }
    }

    /// Definition for a token, if its symbol is registered.
    pub fn lookup(&self, token: &Token) -> Option<&SymbolDef> {
        self.get(self.key_for(token))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All registered ids, in no particular order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.symbols.keys().map(String::as_str)
    }
}

/// Binding powers of the QuakeC grammar. Only their order matters.
mod bp {
    pub const ASSIGN: u32 = 10;
    pub const OR: u32 = 20;
    pub const AND: u32 = 30;
    pub const COMPARE: u32 = 40;
    pub const BITWISE: u32 = 45;
    pub const SUM: u32 = 50;
    pub const PRODUCT: u32 = 60;
    pub const POSTFIX: u32 = 80;
    pub const PREFIX: u32 = 100;
}

/// A builder preloaded with the QuakeC grammar, for callers that want to
/// extend it before building.
pub fn quakec_builder() -> GrammarBuilder {
    let mut g = GrammarBuilder::new();

    g.literal();
    g.name();
    for terminator in [")", ",", ";", "}", END] {
        g.register(terminator, 0);
    }
    g.keyword("else");

    g.member_access(bp::POSTFIX);
    g.group();
    g.call(bp::POSTFIX);

    g.prefix("+", bp::PREFIX, UnaryOp::Plus);
    g.prefix("-", bp::PREFIX, UnaryOp::Neg);
    g.prefix("!", bp::PREFIX, UnaryOp::Not);

    g.infix("*", bp::PRODUCT, BinaryOp::Mul);
    g.infix("/", bp::PRODUCT, BinaryOp::Div);
    g.infix("+", bp::SUM, BinaryOp::Add);
    g.infix("-", bp::SUM, BinaryOp::Sub);
    g.infix("&", bp::BITWISE, BinaryOp::BitAnd);
    g.infix("|", bp::BITWISE, BinaryOp::BitOr);
    g.infix("==", bp::COMPARE, BinaryOp::Eq);
    g.infix("!=", bp::COMPARE, BinaryOp::NotEq);
    g.infix("<", bp::COMPARE, BinaryOp::Lt);
    g.infix("<=", bp::COMPARE, BinaryOp::LtEq);
    g.infix(">", bp::COMPARE, BinaryOp::Gt);
    g.infix(">=", bp::COMPARE, BinaryOp::GtEq);
    g.infix("&&", bp::AND, BinaryOp::And);
    g.infix("||", bp::OR, BinaryOp::Or);

    g.assignment("=", bp::ASSIGN, None);
    g.assignment("+=", bp::ASSIGN, Some(BinaryOp::Add));
    g.assignment("-=", bp::ASSIGN, Some(BinaryOp::Sub));
    g.assignment("*=", bp::ASSIGN, Some(BinaryOp::Mul));
    g.assignment("/=", bp::ASSIGN, Some(BinaryOp::Div));

    g.stmt("{", Std::Block);
    g.stmt(TYPE, Std::Declaration);
    g.stmt(".", Std::Declaration);
    g.stmt("local", Std::Local);
    g.stmt("if", Std::If);
    g.stmt("while", Std::While);
    g.stmt("do", Std::DoWhile);
    g.stmt("return", Std::Return);
    g.stmt(";", Std::Empty);

    g
}

#[cfg(test)]
mod tests;
