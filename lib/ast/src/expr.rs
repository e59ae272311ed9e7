//! Expression nodes.
//!
//! Statements own expressions opaquely: the statement walk engine calls
//! into [`Expr::walk`] for every expression it reaches, and descent into
//! expression-internal structure happens here, under the same verdict
//! protocol.

use core::cell::Cell;
use core::fmt;
use core::ops::ControlFlow;

use loc::Loc;

use crate::walk::{try_walk, Walk, WalkOrder};
use crate::AstContext;

/// Identifies which concrete variant an [`Expr`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExprKind {
    IntLit,
    Name,
    Unary,
    Binary,
    Paren,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnOp {
    Neg,
    Not,
}

impl fmt::Display for UnOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            UnOp::Neg => "-",
            UnOp::Not => "!",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Lt,
    Eq,
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Lt => "<",
            BinOp::Eq => "==",
        })
    }
}

/// An expression node.
///
/// Like statements, expressions are built only through the factory
/// functions on this type and live in the [`AstContext`]'s arena.
pub enum Expr<'ast> {
    IntLit(IntLitExpr),
    Name(NameExpr<'ast>),
    Unary(UnaryExpr<'ast>),
    Binary(BinaryExpr<'ast>),
    Paren(ParenExpr<'ast>),
}

impl<'ast> Expr<'ast> {
    /// An integer literal, like `42`
    pub fn int_lit(ctx: &AstContext<'ast>, value: i64, loc: Loc) -> &'ast Expr<'ast> {
        ctx.alloc(Expr::IntLit(IntLitExpr { value, loc }))
    }

    /// A reference to a name, like `x`. The name is copied into the
    /// context.
    pub fn name(ctx: &AstContext<'ast>, name: &str, loc: Loc) -> &'ast Expr<'ast> {
        let name = ctx.alloc_str(name);
        ctx.alloc(Expr::Name(NameExpr { name, loc }))
    }

    /// A unary operation, like `-x`
    pub fn unary(
        ctx: &AstContext<'ast>,
        op: UnOp,
        op_loc: Loc,
        operand: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        ctx.alloc(Expr::Unary(UnaryExpr {
            op,
            op_loc,
            operand: Cell::new(operand),
        }))
    }

    /// A binary operation, like `a + b`
    pub fn binary(
        ctx: &AstContext<'ast>,
        lhs: &'ast Expr<'ast>,
        op: BinOp,
        op_loc: Loc,
        rhs: &'ast Expr<'ast>,
    ) -> &'ast Expr<'ast> {
        ctx.alloc(Expr::Binary(BinaryExpr {
            op,
            op_loc,
            lhs: Cell::new(lhs),
            rhs: Cell::new(rhs),
        }))
    }

    /// A parenthesized expression, like `(x)`
    pub fn paren(
        ctx: &AstContext<'ast>,
        lparen_loc: Loc,
        inner: &'ast Expr<'ast>,
        rparen_loc: Loc,
    ) -> &'ast Expr<'ast> {
        ctx.alloc(Expr::Paren(ParenExpr {
            lparen_loc,
            rparen_loc,
            inner: Cell::new(inner),
        }))
    }

    /// The kind tag of this expression. O(1), fixed at construction.
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::IntLit(_) => ExprKind::IntLit,
            Expr::Name(_) => ExprKind::Name,
            Expr::Unary(_) => ExprKind::Unary,
            Expr::Binary(_) => ExprKind::Binary,
            Expr::Paren(_) => ExprKind::Paren,
        }
    }

    /// Location where this expression starts in the source
    pub fn start_loc(&self) -> Loc {
        match self {
            Expr::IntLit(l) => l.loc(),
            Expr::Name(n) => n.loc(),
            Expr::Unary(u) => u.op_loc(),
            Expr::Binary(b) => b.lhs().start_loc(),
            Expr::Paren(p) => p.lparen_loc(),
        }
    }

    pub fn as_int_lit(&self) -> Option<&IntLitExpr> {
        match self {
            Expr::IntLit(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_name(&self) -> Option<&NameExpr<'ast>> {
        match self {
            Expr::Name(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_unary(&self) -> Option<&UnaryExpr<'ast>> {
        match self {
            Expr::Unary(u) => Some(u),
            _ => None,
        }
    }

    pub fn as_binary(&self) -> Option<&BinaryExpr<'ast>> {
        match self {
            Expr::Binary(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_paren(&self) -> Option<&ParenExpr<'ast>> {
        match self {
            Expr::Paren(p) => Some(p),
            _ => None,
        }
    }

    /// Walks this expression and every expression nested inside it with
    /// the same verdict protocol as [`Stmt::walk`](crate::Stmt::walk):
    /// `expr_fn` runs pre- and post-order per node, and can replace,
    /// prune or abort. Returns `None` if the walk was aborted.
    pub fn walk<E>(&'ast self, expr_fn: &mut E) -> Option<&'ast Expr<'ast>>
    where
        E: FnMut(&'ast Expr<'ast>, WalkOrder) -> Walk<'ast, Expr<'ast>>,
    {
        match walk_expr(self, expr_fn) {
            ControlFlow::Continue(expr) => Some(expr),
            ControlFlow::Break(()) => None,
        }
    }
}

pub(crate) fn walk_expr<'ast, E>(
    expr: &'ast Expr<'ast>,
    expr_fn: &mut E,
) -> ControlFlow<(), &'ast Expr<'ast>>
where
    E: FnMut(&'ast Expr<'ast>, WalkOrder) -> Walk<'ast, Expr<'ast>>,
{
    let expr = match expr_fn(expr, WalkOrder::Pre) {
        Walk::Continue => expr,
        Walk::Replace(r) => r,
        Walk::Skip => return ControlFlow::Continue(expr),
        Walk::Abort => return ControlFlow::Break(()),
    };

    match expr {
        Expr::IntLit(_) | Expr::Name(_) => {}
        Expr::Unary(u) => {
            u.set_operand(try_walk!(walk_expr(u.operand(), expr_fn)));
        }
        Expr::Binary(b) => {
            b.set_lhs(try_walk!(walk_expr(b.lhs(), expr_fn)));
            b.set_rhs(try_walk!(walk_expr(b.rhs(), expr_fn)));
        }
        Expr::Paren(p) => {
            p.set_inner(try_walk!(walk_expr(p.inner(), expr_fn)));
        }
    }

    match expr_fn(expr, WalkOrder::Post) {
        Walk::Continue | Walk::Skip => ControlFlow::Continue(expr),
        Walk::Replace(r) => ControlFlow::Continue(r),
        Walk::Abort => ControlFlow::Break(()),
    }
}

/// An integer literal, like `42`
pub struct IntLitExpr {
    value: i64,
    loc: Loc,
}

impl IntLitExpr {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }
}

/// A reference to a name, like `x`
pub struct NameExpr<'ast> {
    name: &'ast str,
    loc: Loc,
}

impl<'ast> NameExpr<'ast> {
    pub fn name(&self) -> &'ast str {
        self.name
    }

    pub fn loc(&self) -> Loc {
        self.loc
    }
}

/// A unary operation, like `-x`
pub struct UnaryExpr<'ast> {
    op: UnOp,
    op_loc: Loc,
    operand: Cell<&'ast Expr<'ast>>,
}

impl<'ast> UnaryExpr<'ast> {
    pub fn op(&self) -> UnOp {
        self.op
    }

    pub fn op_loc(&self) -> Loc {
        self.op_loc
    }

    pub fn operand(&self) -> &'ast Expr<'ast> {
        self.operand.get()
    }

    pub fn set_operand(&self, e: &'ast Expr<'ast>) {
        self.operand.set(e);
    }
}

/// A binary operation, like `a + b`
pub struct BinaryExpr<'ast> {
    op: BinOp,
    op_loc: Loc,
    lhs: Cell<&'ast Expr<'ast>>,
    rhs: Cell<&'ast Expr<'ast>>,
}

impl<'ast> BinaryExpr<'ast> {
    pub fn op(&self) -> BinOp {
        self.op
    }

    pub fn op_loc(&self) -> Loc {
        self.op_loc
    }

    pub fn lhs(&self) -> &'ast Expr<'ast> {
        self.lhs.get()
    }

    pub fn set_lhs(&self, e: &'ast Expr<'ast>) {
        self.lhs.set(e);
    }

    pub fn rhs(&self) -> &'ast Expr<'ast> {
        self.rhs.get()
    }

    pub fn set_rhs(&self, e: &'ast Expr<'ast>) {
        self.rhs.set(e);
    }
}

/// A parenthesized expression, like `(x)`
pub struct ParenExpr<'ast> {
    lparen_loc: Loc,
    rparen_loc: Loc,
    inner: Cell<&'ast Expr<'ast>>,
}

impl<'ast> ParenExpr<'ast> {
    pub fn lparen_loc(&self) -> Loc {
        self.lparen_loc
    }

    pub fn rparen_loc(&self) -> Loc {
        self.rparen_loc
    }

    pub fn inner(&self) -> &'ast Expr<'ast> {
        self.inner.get()
    }

    pub fn set_inner(&self, e: &'ast Expr<'ast>) {
        self.inner.set(e);
    }
}
