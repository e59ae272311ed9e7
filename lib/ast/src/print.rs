//! Structural debug rendering.
//!
//! Every node can render itself and its owned children as an indented
//! s-expression. The output is purely diagnostic; nothing parses it back.

use core::fmt::{self, Write};

use crate::decl::Decl;
use crate::expr::Expr;
use crate::stmt::{BraceElement, Stmt};

fn indent(out: &mut dyn Write, depth: usize) -> fmt::Result {
    for _ in 0..depth {
        out.write_str("  ")?;
    }
    Ok(())
}

impl Stmt<'_> {
    /// Writes a structural rendering of this statement and everything it
    /// owns, nested `depth` levels deep.
    pub fn print(&self, out: &mut dyn Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        match self {
            Stmt::Semi(_) => write!(out, "(semi_stmt)"),
            Stmt::Assign(a) => {
                writeln!(out, "(assign_stmt")?;
                a.dest().print(out, depth + 1)?;
                writeln!(out)?;
                a.src().print(out, depth + 1)?;
                write!(out, ")")
            }
            Stmt::Brace(b) => {
                write!(out, "(brace_stmt")?;
                for elt in b.elements() {
                    writeln!(out)?;
                    match elt {
                        BraceElement::Expr(e) => e.print(out, depth + 1)?,
                        BraceElement::Stmt(s) => s.print(out, depth + 1)?,
                        BraceElement::Decl(d) => d.print(out, depth + 1)?,
                    }
                }
                write!(out, ")")
            }
            Stmt::Return(r) => match r.result() {
                Some(result) => {
                    writeln!(out, "(return_stmt")?;
                    result.print(out, depth + 1)?;
                    write!(out, ")")
                }
                None => write!(out, "(return_stmt)"),
            },
            Stmt::If(i) => {
                writeln!(out, "(if_stmt")?;
                i.cond().print(out, depth + 1)?;
                writeln!(out)?;
                i.then_stmt().print(out, depth + 1)?;
                if let Some(els) = i.else_stmt() {
                    writeln!(out)?;
                    els.print(out, depth + 1)?;
                }
                write!(out, ")")
            }
            Stmt::While(w) => {
                writeln!(out, "(while_stmt")?;
                w.cond().print(out, depth + 1)?;
                writeln!(out)?;
                w.body().print(out, depth + 1)?;
                write!(out, ")")
            }
        }
    }

    /// Dumps the rendering of [`print`](Self::print) to stderr
    pub fn dump(&self) {
        eprintln!("{self:?}");
    }
}

impl Expr<'_> {
    /// Writes a structural rendering of this expression and everything it
    /// owns, nested `depth` levels deep.
    pub fn print(&self, out: &mut dyn Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        match self {
            Expr::IntLit(l) => write!(out, "(int_lit_expr {})", l.value()),
            Expr::Name(n) => write!(out, "(name_expr {})", n.name()),
            Expr::Unary(u) => {
                writeln!(out, "(unary_expr {}", u.op())?;
                u.operand().print(out, depth + 1)?;
                write!(out, ")")
            }
            Expr::Binary(b) => {
                writeln!(out, "(binary_expr {}", b.op())?;
                b.lhs().print(out, depth + 1)?;
                writeln!(out)?;
                b.rhs().print(out, depth + 1)?;
                write!(out, ")")
            }
            Expr::Paren(p) => {
                writeln!(out, "(paren_expr")?;
                p.inner().print(out, depth + 1)?;
                write!(out, ")")
            }
        }
    }

    /// Dumps the rendering of [`print`](Self::print) to stderr
    pub fn dump(&self) {
        eprintln!("{self:?}");
    }
}

impl Decl<'_> {
    /// Writes a structural rendering of this declaration, nested `depth`
    /// levels deep.
    pub fn print(&self, out: &mut dyn Write, depth: usize) -> fmt::Result {
        indent(out, depth)?;
        match self.init() {
            Some(init) => {
                writeln!(out, "(decl {}", self.name())?;
                init.print(out, depth + 1)?;
                write!(out, ")")
            }
            None => write!(out, "(decl {})", self.name()),
        }
    }

    /// Dumps the rendering of [`print`](Self::print) to stderr
    pub fn dump(&self) {
        eprintln!("{self:?}");
    }
}

impl fmt::Debug for Stmt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0)
    }
}

impl fmt::Debug for Expr<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0)
    }
}

impl fmt::Debug for Decl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.print(f, 0)
    }
}
