use crate::fold::compare;
use crate::tri::Tri;
use pact_ast::BinOp;

/// Given a known bound `var KNOWN_OP k` and a query `var QUERY_OP q`,
/// decides whether the bound entails, contradicts, or says nothing about
/// the query. This is the full fixed table — the single extension point
/// of the verifier — not just the "representative entries".
pub(crate) fn implies(known_op: BinOp, k: f64, query_op: BinOp, q: f64) -> Tri {
    match known_op {
        BinOp::Eq => Tri::from_bool(compare(query_op, k, q)),
        BinOp::Ge => match query_op {
            BinOp::Ge => {
                if k >= q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Gt => {
                if k > q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Lt => {
                if k >= q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Le => {
                if k > q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            _ => Tri::Unknown,
        },
        BinOp::Gt => match query_op {
            BinOp::Ge | BinOp::Gt => {
                if k >= q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Lt | BinOp::Le => {
                if k >= q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            _ => Tri::Unknown,
        },
        BinOp::Le => match query_op {
            BinOp::Le => {
                if k <= q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Lt => {
                if k < q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Gt => {
                if k <= q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Ge => {
                if k < q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            _ => Tri::Unknown,
        },
        BinOp::Lt => match query_op {
            BinOp::Le | BinOp::Lt => {
                if k <= q {
                    Tri::True
                } else {
                    Tri::Unknown
                }
            }
            BinOp::Gt | BinOp::Ge => {
                if k <= q {
                    Tri::False
                } else {
                    Tri::Unknown
                }
            }
            _ => Tri::Unknown,
        },
        _ => Tri::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ge_known_entails_ge_query_when_tighter() {
        assert_eq!(implies(BinOp::Ge, 5.0, BinOp::Ge, 3.0), Tri::True);
    }

    #[test]
    fn ge_known_contradicts_lt_query() {
        assert_eq!(implies(BinOp::Ge, 5.0, BinOp::Lt, 3.0), Tri::False);
    }

    #[test]
    fn eq_known_decides_every_query() {
        assert_eq!(implies(BinOp::Eq, 5.0, BinOp::Gt, 3.0), Tri::True);
        assert_eq!(implies(BinOp::Eq, 5.0, BinOp::Lt, 3.0), Tri::False);
    }

    #[test]
    fn loose_bound_is_unknown() {
        assert_eq!(implies(BinOp::Ge, 1.0, BinOp::Ge, 3.0), Tri::Unknown);
    }
}
