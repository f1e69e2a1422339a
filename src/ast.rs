//! # Caraway Configuration Language - Abstract Syntax Tree
//!
//! This module defines the Abstract Syntax Tree (AST) for the Caraway
//! configuration language, a small declarative language of numbers, nested
//! arrays, named constants, and bracketed constant-folding expressions.
//!
//! ## Architecture Overview
//!
//! The AST module is organized into focused submodules:
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[expressions]** - Expression nodes (literals, arrays, arithmetic, `len`)
//! - **[operators]** - Binary arithmetic operators
//! - **[statements]** - Top-level statements (constant definition, bare value)
//! - **[document]** - A complete parsed document
//!
//! ## Quick Start
//!
//! ```text
//! def base = 10
//! (base, 2.5, (1, 2))
//! .[base * 3 + len((1, 2))].
//! ```
//!
//! This defines a constant, emits an array, and emits a folded expression.
//!
//! ## Core Concepts
//!
//! ### Document Structure
//!
//! A document is a flat sequence of statements. Constant definitions bind a
//! name for all *later* statements and produce no output; every other
//! statement contributes one value to the result sequence.
//!
//! ### Constant-Folding Expressions
//!
//! Arithmetic is only available inside `.[ ... ].` regions:
//!
//! ```text
//! .[a * (b + c)].
//! .[len(items) - 1].
//! ```
//!
//! Addition and subtraction bind looser than multiplication and division;
//! both levels are left-associative. Division always yields a float.
//!
//! ### Parentheses
//!
//! In value position `( ... )` is always an array literal. Inside a
//! constant-folding expression a parenthesized form with no top-level comma
//! is an arithmetic grouping; with a comma it is an array, usable as an
//! operand to `len`.

pub mod tokens;
pub mod expressions;
pub mod operators;
pub mod statements;
pub mod document;

pub use tokens::Token;
pub use expressions::Expr;
pub use operators::BinOp;
pub use statements::Statement;
pub use document::Document;
