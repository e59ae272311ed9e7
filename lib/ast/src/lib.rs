//! In-memory representation of executable statements, plus the single
//! generic mechanism every later pass uses to traverse and rewrite it.
//!
//! Nodes live in an arena owned by an [`AstContext`]: a whole parsed unit
//! is reclaimed at once when the context is dropped, and no node is ever
//! freed individually. Construction goes exclusively through the factory
//! functions on [`Stmt`], [`Expr`] and [`Decl`], all of which require a
//! live context.
//!
//! Passes mutate the tree either through the per-variant setters or
//! through the splice protocol of [`Stmt::walk`].

pub mod decl;
pub mod expr;
mod print;
pub mod stmt;
pub mod walk;

pub use decl::Decl;
pub use expr::{BinOp, Expr, ExprKind, UnOp};
pub use stmt::{BraceElement, Stmt, StmtKind};
pub use walk::{Walk, WalkOrder};

use arena::DroplessArena;

/// Owns the memory of every AST node of one compilation unit.
///
/// All node factories take a context and return `&'ast` references into
/// its arena; the references stay valid exactly as long as the context.
/// Replacing a child never frees the old one — the arena is append-only,
/// and the whole unit is reclaimed in bulk when the context is dropped.
pub struct AstContext<'ast> {
    arena: DroplessArena<'ast>,
}

impl<'ast> AstContext<'ast> {
    pub fn new() -> Self {
        Self {
            arena: DroplessArena::default(),
        }
    }

    /// Copies a string (e.g. an identifier) into the context
    pub fn alloc_str(&self, s: &str) -> &'ast str {
        self.arena.alloc_str(s)
    }

    pub(crate) fn alloc<T>(&self, value: T) -> &'ast T {
        self.arena.alloc(value)
    }

    pub(crate) fn alloc_iter<T, I>(&self, iter: I) -> &'ast [T]
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.arena.alloc_iter(iter)
    }
}

impl Default for AstContext<'_> {
    fn default() -> Self {
        Self::new()
    }
}
