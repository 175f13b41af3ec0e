use syn::{BinOp, Expr, ExprRange, Lit, Stmt};

// Unwraps `{ expr }` blocks containing a single trailing expression.
fn inner_expr(expr: &Expr) -> Option<&Expr> {
    match expr {
        Expr::Block(block) if block.block.stmts.len() == 1 => match &block.block.stmts[0] {
            Stmt::Expr(expr, None) => Some(expr),
            _ => None,
        },
        Expr::Paren(paren) => Some(&paren.expr),
        Expr::Group(group) => Some(&group.expr),
        _ => None,
    }
}

pub fn evaluate_range(expr: &Expr) -> Option<&ExprRange> {
    match expr {
        Expr::Range(range) => Some(range),
        _ => inner_expr(expr).and_then(evaluate_range),
    }
}

pub fn evaluate_usize(expr: &Expr) -> Option<usize> {
    match expr {
        Expr::Lit(literal) => match &literal.lit {
            Lit::Int(int) => int.base10_parse().ok(),
            _ => None,
        },
        Expr::Binary(binary) => {
            let left = evaluate_usize(&binary.left)?;
            let right = evaluate_usize(&binary.right)?;
            match binary.op {
                BinOp::Add(_) => left.checked_add(right),
                BinOp::Sub(_) => left.checked_sub(right),
                BinOp::Mul(_) => left.checked_mul(right),
                BinOp::Div(_) => left.checked_div(right),
                BinOp::Rem(_) => left.checked_rem(right),
                _ => None,
            }
        }
        _ => inner_expr(expr).and_then(evaluate_usize),
    }
}
