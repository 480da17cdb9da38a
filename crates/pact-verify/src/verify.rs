use crate::bounds::extract_bounds;
use crate::eval::evaluate;
use crate::render::describe;
use crate::tri::Tri;
use pact_ast::{Declaration, Expression, Program, TypeDeclaration};
use pact_util::Pos;

/// Which contract clause a [`VerificationResult`] reports on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    Precondition,
    Postcondition,
    Invariant,
}

impl ContractKind {
    fn label(self) -> &'static str {
        match self {
            ContractKind::Precondition => "precondition",
            ContractKind::Postcondition => "postcondition",
            ContractKind::Invariant => "invariant",
        }
    }
}

/// The outcome of trying to prove one contract clause. `PROVEN` requires a
/// definite true, `VIOLATED` a definite false; anything short of that is
/// `UNPROVEN` — the verifier reports what it could not decide rather than
/// guessing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Proven,
    Unproven,
    Violated,
}

impl From<Tri> for Status {
    fn from(tri: Tri) -> Self {
        match tri {
            Tri::True => Status::Proven,
            Tri::False => Status::Violated,
            Tri::Unknown => Status::Unproven,
        }
    }
}

/// One verification record, positioned on the clause it reports.
#[derive(Clone, Debug, PartialEq)]
pub struct VerificationResult {
    pub declaration: String,
    pub kind: ContractKind,
    pub status: Status,
    pub message: String,
    pub pos: Pos,
}

fn record(declaration: &str, kind: ContractKind, expr: &Expression, status: Status) -> VerificationResult {
    let label = kind.label();
    let message = match status {
        Status::Proven => format!("{label} `{}` holds", describe(expr)),
        Status::Violated => format!("{label} `{}` is violated", describe(expr)),
        Status::Unproven => format!("{label} `{}` could not be proven", describe(expr)),
    };
    VerificationResult { declaration: declaration.to_string(), kind, status, message, pos: expr.pos() }
}

/// Verifies every function's contracts and every type declaration's
/// invariants, returning one result per clause in source order.
pub fn verify_program(program: &Program) -> Vec<VerificationResult> {
    let mut results = Vec::new();
    for decl in &program.declarations {
        match decl {
            Declaration::Function(f) => verify_function(f, &mut results),
            Declaration::Type(t) => verify_type_declaration(t, &mut results),
        }
    }
    results
}

fn verify_function(f: &pact_ast::FunctionDeclaration, results: &mut Vec<VerificationResult>) {
    // Preconditions are evaluated independently of each other, against an
    // empty assumption set, but together they build the bounds that feed
    // postcondition checking.
    let mut assumptions = Vec::new();
    for precondition in &f.preconditions {
        let status = Status::from(evaluate(precondition, &[]));
        results.push(record(&f.name, ContractKind::Precondition, precondition, status));
        assumptions.extend(extract_bounds(precondition));
    }
    for postcondition in &f.postconditions {
        let status = Status::from(evaluate(postcondition, &assumptions));
        results.push(record(&f.name, ContractKind::Postcondition, postcondition, status));
    }
}

fn verify_type_declaration(t: &TypeDeclaration, results: &mut Vec<VerificationResult>) {
    let mut assumptions = Vec::new();
    for invariant in &t.invariants {
        let status = Status::from(evaluate(invariant, &assumptions));
        results.push(record(&t.name, ContractKind::Invariant, invariant, status));
        assumptions.extend(extract_bounds(invariant));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pact_lex::lex;
    use pact_parse::Parser;

    fn verify(source: &str) -> Vec<VerificationResult> {
        let tokens = lex(source).unwrap();
        let program = Parser::new(tokens).parse().unwrap();
        verify_program(&program)
    }

    #[test]
    fn precondition_proven_by_reflexivity() {
        let results = verify("define f(x: Int) -> Int\n  expect x >= x\ngiven\n  x\n");
        assert_eq!(results[0].status, Status::Proven);
    }

    #[test]
    fn postcondition_proven_from_precondition_bound() {
        let results = verify("define f(x: Int) -> Int\n  expect x >= 5\n  ensure x >= 3\ngiven\n  x\n");
        assert_eq!(results[1].status, Status::Proven);
    }

    #[test]
    fn postcondition_violated_by_contradiction() {
        let results = verify("define f(x: Int) -> Int\n  expect x >= 5\n  ensure x < 3\ngiven\n  x\n");
        assert_eq!(results[1].status, Status::Violated);
    }

    #[test]
    fn unrelated_postcondition_is_unproven() {
        let results = verify("define f(x: Int, y: Int) -> Int\n  expect x >= 5\n  ensure y >= 0\ngiven\n  x\n");
        assert_eq!(results[1].status, Status::Unproven);
    }

    #[test]
    fn later_invariant_sees_earlier_invariants_bounds() {
        let results = verify("type T = Int\n  invariant value >= 0\n  invariant value >= -1\n");
        assert_eq!(results[1].status, Status::Proven);
    }

    #[test]
    fn reflexive_invariant_is_proven() {
        let results = verify("type T = Int\n  invariant value == value\n");
        assert_eq!(results[0].status, Status::Proven);
    }
}
