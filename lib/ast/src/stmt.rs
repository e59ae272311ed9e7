//! Statement nodes.

use core::cell::Cell;
use core::ops::ControlFlow;

use loc::Loc;

use crate::decl::Decl;
use crate::expr::Expr;
use crate::walk::{self, Walk, WalkOrder};
use crate::AstContext;

/// Identifies which concrete variant a [`Stmt`] is.
///
/// The set is closed: every variant is known at build time, and a node's
/// tag is fixed at construction. Reading variant-specific fields goes
/// through pattern matching or the tag-checked `as_*` accessors, so there
/// is no way to read a node through the wrong kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StmtKind {
    Semi,
    Assign,
    Brace,
    Return,
    If,
    While,
}

/// A statement node.
///
/// Statements are built exclusively through the factory functions on this
/// type ([`Stmt::semi`], [`Stmt::assign`], ...), which allocate into an
/// [`AstContext`]. The payload structs keep their fields private, so no
/// node can exist outside a context's arena.
///
/// A statement exclusively owns its direct children; the tree has no
/// cycles and a child sits in exactly one parent slot at a time. Setters
/// replace a child reference in place and rely on the arena for
/// reclamation of the old child.
pub enum Stmt<'ast> {
    Semi(SemiStmt),
    Assign(AssignStmt<'ast>),
    Brace(BraceStmt<'ast>),
    Return(ReturnStmt<'ast>),
    If(IfStmt<'ast>),
    While(WhileStmt<'ast>),
}

impl<'ast> Stmt<'ast> {
    /// A semicolon, the no-op statement: `;`
    pub fn semi(ctx: &AstContext<'ast>, loc: Loc) -> &'ast Stmt<'ast> {
        ctx.alloc(Stmt::Semi(SemiStmt { loc }))
    }

    /// A value assignment, like `x = y`
    pub fn assign(
        ctx: &AstContext<'ast>,
        dest: &'ast Expr<'ast>,
        equal_loc: Loc,
        src: &'ast Expr<'ast>,
    ) -> &'ast Stmt<'ast> {
        ctx.alloc(Stmt::Assign(AssignStmt {
            dest: Cell::new(dest),
            src: Cell::new(src),
            equal_loc,
        }))
    }

    /// A brace-enclosed sequence of expressions, statements and
    /// declarations, like `{ 4; 5 }`.
    ///
    /// The elements are copied into a single arena allocation sized from
    /// the iterator, so element count and storage length always agree.
    pub fn brace<I>(
        ctx: &AstContext<'ast>,
        lbrace_loc: Loc,
        elements: I,
        rbrace_loc: Loc,
    ) -> &'ast Stmt<'ast>
    where
        I: IntoIterator<Item = BraceElement<'ast>>,
        I::IntoIter: ExactSizeIterator,
    {
        let elements = ctx.alloc_iter(elements.into_iter().map(Cell::new));
        ctx.alloc(Stmt::Brace(BraceStmt {
            lbrace_loc,
            rbrace_loc,
            elements,
        }))
    }

    /// A return statement, with an optional result: `return 42`
    pub fn ret(
        ctx: &AstContext<'ast>,
        return_loc: Loc,
        result: Option<&'ast Expr<'ast>>,
    ) -> &'ast Stmt<'ast> {
        ctx.alloc(Stmt::Return(ReturnStmt {
            return_loc,
            result: Cell::new(result),
        }))
    }

    /// An if/then/else statement. The else branch carries the location of
    /// its `else` keyword; when it is absent, no else location exists
    /// either.
    pub fn if_stmt(
        ctx: &AstContext<'ast>,
        if_loc: Loc,
        cond: &'ast Expr<'ast>,
        then_stmt: &'ast Stmt<'ast>,
        else_branch: Option<(Loc, &'ast Stmt<'ast>)>,
    ) -> &'ast Stmt<'ast> {
        let (else_loc, else_stmt) = match else_branch {
            Some((loc, stmt)) => (Some(loc), Some(stmt)),
            None => (None, None),
        };
        ctx.alloc(Stmt::If(IfStmt {
            if_loc,
            else_loc,
            cond: Cell::new(cond),
            then_stmt: Cell::new(then_stmt),
            else_stmt: Cell::new(else_stmt),
        }))
    }

    /// A while loop: `while c body`
    pub fn while_stmt(
        ctx: &AstContext<'ast>,
        while_loc: Loc,
        cond: &'ast Expr<'ast>,
        body: &'ast Stmt<'ast>,
    ) -> &'ast Stmt<'ast> {
        ctx.alloc(Stmt::While(WhileStmt {
            while_loc,
            cond: Cell::new(cond),
            body: Cell::new(body),
        }))
    }

    /// The kind tag of this statement. O(1), fixed at construction.
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::Semi(_) => StmtKind::Semi,
            Stmt::Assign(_) => StmtKind::Assign,
            Stmt::Brace(_) => StmtKind::Brace,
            Stmt::Return(_) => StmtKind::Return,
            Stmt::If(_) => StmtKind::If,
            Stmt::While(_) => StmtKind::While,
        }
    }

    /// Location where this statement starts in the source.
    ///
    /// Only the start is tracked; statements do not record where they end.
    pub fn start_loc(&self) -> Loc {
        match self {
            Stmt::Semi(s) => s.loc(),
            Stmt::Assign(a) => a.start_loc(),
            Stmt::Brace(b) => b.lbrace_loc(),
            Stmt::Return(r) => r.return_loc(),
            Stmt::If(i) => i.if_loc(),
            Stmt::While(w) => w.while_loc(),
        }
    }

    pub fn as_semi(&self) -> Option<&SemiStmt> {
        match self {
            Stmt::Semi(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_assign(&self) -> Option<&AssignStmt<'ast>> {
        match self {
            Stmt::Assign(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_brace(&self) -> Option<&BraceStmt<'ast>> {
        match self {
            Stmt::Brace(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_return(&self) -> Option<&ReturnStmt<'ast>> {
        match self {
            Stmt::Return(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_if(&self) -> Option<&IfStmt<'ast>> {
        match self {
            Stmt::If(i) => Some(i),
            _ => None,
        }
    }

    pub fn as_while(&self) -> Option<&WhileStmt<'ast>> {
        match self {
            Stmt::While(w) => Some(w),
            _ => None,
        }
    }

    /// Recursively walks every statement and expression contained in this
    /// statement, invoking `stmt_fn` on each statement and `expr_fn` on
    /// each expression.
    ///
    /// Both visitors run twice per node, once before its children are
    /// visited ([`WalkOrder::Pre`]) and once after ([`WalkOrder::Post`]);
    /// the returned [`Walk`] verdict steers the traversal:
    ///
    /// * [`Walk::Continue`] keeps the current node.
    /// * [`Walk::Replace`] splices the returned node into the parent slot
    ///   (or makes it the value returned by `walk` at the top level). In
    ///   pre-order, the traversal then descends into the *replacement*'s
    ///   children.
    /// * [`Walk::Skip`] in pre-order prunes the subtree: neither the
    ///   children nor the node's own post-order visit run, but siblings
    ///   and ancestors are still traversed. In post-order there is nothing
    ///   left to skip and it behaves like `Continue`.
    /// * [`Walk::Abort`] terminates the whole walk; `walk` returns `None`.
    ///   Splices already performed are not rolled back, so an aborted
    ///   tree must be treated as unusable by the caller.
    ///
    /// Children are visited in declaration order. Descent inside an
    /// expression's own structure is handled by [`Expr::walk`];
    /// declarations are opaque and not descended into.
    pub fn walk<E, S>(&'ast self, expr_fn: &mut E, stmt_fn: &mut S) -> Option<&'ast Stmt<'ast>>
    where
        E: FnMut(&'ast Expr<'ast>, WalkOrder) -> Walk<'ast, Expr<'ast>>,
        S: FnMut(&'ast Stmt<'ast>, WalkOrder) -> Walk<'ast, Stmt<'ast>>,
    {
        match walk::walk_stmt(self, expr_fn, stmt_fn) {
            ControlFlow::Continue(stmt) => Some(stmt),
            ControlFlow::Break(()) => None,
        }
    }
}

/// A semicolon, the no-op statement: `;`
pub struct SemiStmt {
    loc: Loc,
}

impl SemiStmt {
    pub fn loc(&self) -> Loc {
        self.loc
    }
}

/// A value assignment, like `x = y`
pub struct AssignStmt<'ast> {
    dest: Cell<&'ast Expr<'ast>>,
    src: Cell<&'ast Expr<'ast>>,
    equal_loc: Loc,
}

impl<'ast> AssignStmt<'ast> {
    pub fn dest(&self) -> &'ast Expr<'ast> {
        self.dest.get()
    }

    pub fn set_dest(&self, e: &'ast Expr<'ast>) {
        self.dest.set(e);
    }

    pub fn src(&self) -> &'ast Expr<'ast> {
        self.src.get()
    }

    pub fn set_src(&self, e: &'ast Expr<'ast>) {
        self.src.set(e);
    }

    pub fn equal_loc(&self) -> Loc {
        self.equal_loc
    }

    /// An assignment starts wherever its destination does.
    pub fn start_loc(&self) -> Loc {
        self.dest().start_loc()
    }
}

/// One element of a [`BraceStmt`], tagged with which hierarchy it
/// belongs to.
#[derive(Clone, Copy)]
pub enum BraceElement<'ast> {
    Expr(&'ast Expr<'ast>),
    Stmt(&'ast Stmt<'ast>),
    Decl(&'ast Decl<'ast>),
}

/// A brace-enclosed sequence of expressions, statements and declarations,
/// like `{ 4; 5 }`.
///
/// Elements are stored in one contiguous arena allocation in declaration
/// order; the element count is the length of that storage.
pub struct BraceStmt<'ast> {
    lbrace_loc: Loc,
    rbrace_loc: Loc,
    elements: &'ast [Cell<BraceElement<'ast>>],
}

impl<'ast> BraceStmt<'ast> {
    pub fn lbrace_loc(&self) -> Loc {
        self.lbrace_loc
    }

    pub fn rbrace_loc(&self) -> Loc {
        self.rbrace_loc
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// # Panics
    /// If `i` is out of range
    pub fn element(&self, i: usize) -> BraceElement<'ast> {
        self.elements[i].get()
    }

    /// Replaces the element at `i` in place.
    ///
    /// # Panics
    /// If `i` is out of range
    pub fn set_element(&self, i: usize, elt: BraceElement<'ast>) {
        self.elements[i].set(elt);
    }

    /// The elements, in declaration order
    pub fn elements(&self) -> impl Iterator<Item = BraceElement<'ast>> + '_ {
        self.elements.iter().map(Cell::get)
    }

    pub(crate) fn element_slots(&self) -> &'ast [Cell<BraceElement<'ast>>] {
        self.elements
    }
}

/// A return statement with an optional result: `return 42`
pub struct ReturnStmt<'ast> {
    return_loc: Loc,
    result: Cell<Option<&'ast Expr<'ast>>>,
}

impl<'ast> ReturnStmt<'ast> {
    pub fn return_loc(&self) -> Loc {
        self.return_loc
    }

    pub fn result(&self) -> Option<&'ast Expr<'ast>> {
        self.result.get()
    }

    pub fn set_result(&self, e: Option<&'ast Expr<'ast>>) {
        self.result.set(e);
    }
}

/// An if/then/else statement. When no `else` was written, the else branch
/// is absent and there is no else location.
pub struct IfStmt<'ast> {
    if_loc: Loc,
    else_loc: Option<Loc>,
    cond: Cell<&'ast Expr<'ast>>,
    then_stmt: Cell<&'ast Stmt<'ast>>,
    else_stmt: Cell<Option<&'ast Stmt<'ast>>>,
}

impl<'ast> IfStmt<'ast> {
    pub fn if_loc(&self) -> Loc {
        self.if_loc
    }

    /// Location of the `else` keyword, if an else branch was written
    pub fn else_loc(&self) -> Option<Loc> {
        self.else_loc
    }

    pub fn cond(&self) -> &'ast Expr<'ast> {
        self.cond.get()
    }

    pub fn set_cond(&self, e: &'ast Expr<'ast>) {
        self.cond.set(e);
    }

    pub fn then_stmt(&self) -> &'ast Stmt<'ast> {
        self.then_stmt.get()
    }

    pub fn set_then_stmt(&self, s: &'ast Stmt<'ast>) {
        self.then_stmt.set(s);
    }

    pub fn else_stmt(&self) -> Option<&'ast Stmt<'ast>> {
        self.else_stmt.get()
    }

    pub fn set_else_stmt(&self, s: Option<&'ast Stmt<'ast>>) {
        self.else_stmt.set(s);
    }
}

/// A while loop: `while c body`
pub struct WhileStmt<'ast> {
    while_loc: Loc,
    cond: Cell<&'ast Expr<'ast>>,
    body: Cell<&'ast Stmt<'ast>>,
}

impl<'ast> WhileStmt<'ast> {
    pub fn while_loc(&self) -> Loc {
        self.while_loc
    }

    pub fn cond(&self) -> &'ast Expr<'ast> {
        self.cond.get()
    }

    pub fn set_cond(&self, e: &'ast Expr<'ast>) {
        self.cond.set(e);
    }

    pub fn body(&self) -> &'ast Stmt<'ast> {
        self.body.get()
    }

    pub fn set_body(&self, s: &'ast Stmt<'ast>) {
        self.body.set(s);
    }
}
