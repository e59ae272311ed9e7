//! Declaration nodes.
//!
//! Declarations appear only as elements of a brace statement and are
//! opaque to the walk engine: it never descends into them.

use core::cell::Cell;

use loc::Loc;

use crate::expr::Expr;
use crate::AstContext;

/// A variable declaration with an optional initializer, like `var x = 4`
pub struct Decl<'ast> {
    name: &'ast str,
    name_loc: Loc,
    init: Cell<Option<&'ast Expr<'ast>>>,
}

impl<'ast> Decl<'ast> {
    /// The name is copied into the context.
    pub fn new(
        ctx: &AstContext<'ast>,
        name: &str,
        name_loc: Loc,
        init: Option<&'ast Expr<'ast>>,
    ) -> &'ast Decl<'ast> {
        let name = ctx.alloc_str(name);
        ctx.alloc(Decl {
            name,
            name_loc,
            init: Cell::new(init),
        })
    }

    pub fn name(&self) -> &'ast str {
        self.name
    }

    pub fn name_loc(&self) -> Loc {
        self.name_loc
    }

    pub fn start_loc(&self) -> Loc {
        self.name_loc
    }

    pub fn init(&self) -> Option<&'ast Expr<'ast>> {
        self.init.get()
    }

    pub fn set_init(&self, e: Option<&'ast Expr<'ast>>) {
        self.init.set(e);
    }
}
