//! The structural contract of syntax tree nodes built from [`Token`]s.

use std::{borrow::Cow, fmt::Display};

use derive_more::{Deref, From};
use enum_as_inner::EnumAsInner;
use getset::Getters;
use itertools::Itertools;

use crate::lexical::token::Token;

/// Is a node of the syntax tree: either a single token or an ordered list of children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, From, EnumAsInner)]
#[allow(missing_docs)]
pub enum SyntaxTree {
    Leaf(Leaf),
    List(List),
    BinaryExpression(BinaryExpression),
}

impl SyntaxTree {
    /// Returns the `index`-th child, if there is one.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children().nth(index)
    }

    /// Returns the number of children. Leaves have none.
    #[must_use]
    pub fn num_children(&self) -> usize {
        self.children().len()
    }

    /// Returns an iterator over the children in order.
    pub fn children(&self) -> std::slice::Iter<'_, Self> {
        match self {
            Self::Leaf(_) => <&[Self]>::default().iter(),
            Self::List(list) => list.iter(),
            Self::BinaryExpression(expression) => expression.operands.iter(),
        }
    }

    /// Describes where the node starts, as `at line N`.
    ///
    /// Returns [`None`] for lists without any token.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        match self {
            Self::Leaf(leaf) => Some(leaf.location()),
            _ => self.children().find_map(Self::location),
        }
    }
}

impl Display for SyntaxTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Leaf(leaf) => write!(f, "{}", leaf.token),
            _ => write!(f, "({})", self.children().join(" ")),
        }
    }
}

/// A node holding exactly one token.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, From)]
pub struct Leaf {
    /// The token of the leaf.
    #[get = "pub"]
    token: Token,
}

impl Leaf {
    /// Creates a leaf for the given token.
    #[must_use]
    pub fn new(token: Token) -> Self {
        Self { token }
    }

    /// Describes where the token of the leaf was read.
    #[must_use]
    pub fn location(&self) -> String {
        format!("at line {}", self.token.line())
    }
}

/// A node holding an ordered list of children.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From)]
pub struct List {
    #[deref]
    children: Vec<SyntaxTree>,
}

impl List {
    /// Creates a list of the given children.
    #[must_use]
    pub fn new(children: Vec<SyntaxTree>) -> Self {
        Self { children }
    }
}

/// A list of exactly three children: the left operand, the operator and the right operand.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BinaryExpression {
    operands: Box<[SyntaxTree; 3]>,
}

impl BinaryExpression {
    /// Creates a binary expression `left operator right`.
    #[must_use]
    pub fn new(left: SyntaxTree, operator: Leaf, right: SyntaxTree) -> Self {
        Self {
            operands: Box::new([left, SyntaxTree::Leaf(operator), right]),
        }
    }

    /// The left operand.
    #[must_use]
    pub fn left(&self) -> &SyntaxTree {
        &self.operands[0]
    }

    /// The operator as it is spelled in the source.
    #[must_use]
    pub fn operator(&self) -> Cow<str> {
        self.operands[1]
            .as_leaf()
            .map_or(Cow::Borrowed(""), |leaf| leaf.token().text())
    }

    /// The right operand.
    #[must_use]
    pub fn right(&self) -> &SyntaxTree {
        &self.operands[2]
    }
}
