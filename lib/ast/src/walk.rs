//! The generic walk/rewrite engine.
//!
//! One depth-first, order-preserving traversal serves every pass:
//! analysis walks return [`Walk::Continue`] everywhere, rewrites splice
//! replacements in with [`Walk::Replace`], and both can prune subtrees or
//! abort. The entry points are [`Stmt::walk`](crate::Stmt::walk) and
//! [`Expr::walk`](crate::Expr::walk).

use core::ops::ControlFlow;

use crate::expr::{walk_expr, Expr};
use crate::stmt::{BraceElement, Stmt};

/// Stage of a visit: before or after the node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOrder {
    Pre,
    Post,
}

/// Verdict a visitor returns for each visit.
///
/// The four outcomes replace the nullable-return convention where a null
/// meant either "prune" or "abort" depending on the traversal stage.
pub enum Walk<'ast, N> {
    /// Keep the current node and continue normally.
    Continue,
    /// Splice the given node into the parent slot. A pre-order
    /// replacement is descended into; a post-order replacement simply
    /// takes the old node's place.
    Replace(&'ast N),
    /// In pre-order: prune this subtree (no child visits, no post-order
    /// visit for the node) and keep walking siblings and ancestors.
    /// In post-order there is no subtree left to skip; same as
    /// [`Continue`](Walk::Continue).
    Skip,
    /// Terminate the entire walk. The top-level call returns `None`;
    /// splices already committed stay in place, so the tree must be
    /// considered unusable.
    Abort,
}

macro_rules! try_walk {
    ($e:expr) => {
        match $e {
            ControlFlow::Continue(node) => node,
            ControlFlow::Break(b) => return ControlFlow::Break(b),
        }
    };
}
pub(crate) use try_walk;

pub(crate) fn walk_stmt<'ast, E, S>(
    stmt: &'ast Stmt<'ast>,
    expr_fn: &mut E,
    stmt_fn: &mut S,
) -> ControlFlow<(), &'ast Stmt<'ast>>
where
    E: FnMut(&'ast Expr<'ast>, WalkOrder) -> Walk<'ast, Expr<'ast>>,
    S: FnMut(&'ast Stmt<'ast>, WalkOrder) -> Walk<'ast, Stmt<'ast>>,
{
    let stmt = match stmt_fn(stmt, WalkOrder::Pre) {
        Walk::Continue => stmt,
        Walk::Replace(r) => r,
        Walk::Skip => return ControlFlow::Continue(stmt),
        Walk::Abort => return ControlFlow::Break(()),
    };

    /* Children, in declaration order. Every slot is stored back, so a
     * replacement from a child's visit lands in this node's slot. */
    match stmt {
        Stmt::Semi(_) => {}
        Stmt::Assign(a) => {
            a.set_dest(try_walk!(walk_expr(a.dest(), expr_fn)));
            a.set_src(try_walk!(walk_expr(a.src(), expr_fn)));
        }
        Stmt::Brace(b) => {
            for slot in b.element_slots() {
                match slot.get() {
                    BraceElement::Expr(e) => {
                        slot.set(BraceElement::Expr(try_walk!(walk_expr(e, expr_fn))));
                    }
                    BraceElement::Stmt(s) => {
                        slot.set(BraceElement::Stmt(try_walk!(walk_stmt(s, expr_fn, stmt_fn))));
                    }
                    /* Declarations are opaque to the walk */
                    BraceElement::Decl(_) => {}
                }
            }
        }
        Stmt::Return(r) => {
            if let Some(result) = r.result() {
                r.set_result(Some(try_walk!(walk_expr(result, expr_fn))));
            }
        }
        Stmt::If(i) => {
            i.set_cond(try_walk!(walk_expr(i.cond(), expr_fn)));
            i.set_then_stmt(try_walk!(walk_stmt(i.then_stmt(), expr_fn, stmt_fn)));
            if let Some(els) = i.else_stmt() {
                i.set_else_stmt(Some(try_walk!(walk_stmt(els, expr_fn, stmt_fn))));
            }
        }
        Stmt::While(w) => {
            w.set_cond(try_walk!(walk_expr(w.cond(), expr_fn)));
            w.set_body(try_walk!(walk_stmt(w.body(), expr_fn, stmt_fn)));
        }
    }

    match stmt_fn(stmt, WalkOrder::Post) {
        Walk::Continue | Walk::Skip => ControlFlow::Continue(stmt),
        Walk::Replace(r) => ControlFlow::Continue(r),
        Walk::Abort => ControlFlow::Break(()),
    }
}
