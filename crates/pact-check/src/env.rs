use pact_ast::{SimpleType, Type};
use rustc_hash::{FxHashMap, FxHashSet};

/// A type, compacted to its canonical string form (`"Int"`, `"Array[Int]"`,
/// `"Result[Int, String]"`). Every comparison and diagnostic the checker
/// performs wants the string form anyway, and alias resolution is naturally
/// a string-keyed walk of the type declaration table, so there is no
/// separate structural type value in this pass.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeStr(pub String);

impl TypeStr {
    pub fn new(s: impl Into<String>) -> Self {
        TypeStr(s.into())
    }

    pub fn unknown() -> Self {
        TypeStr("Unknown".to_string())
    }

    pub fn bool() -> Self {
        TypeStr("Bool".to_string())
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == "Unknown"
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TypeStr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Renders a parsed [`Type`] into its compact string form.
pub fn type_to_string(ty: &Type) -> String {
    match ty {
        Type::Primitive(p) => p.name().to_string(),
        Type::Array(elem) => format!("Array[{}]", type_to_string(elem)),
        Type::Result(ok, err) => format!("Result[{}, {}]", type_to_string(ok), type_to_string(err)),
        Type::Function(params, ret) => {
            let params = params
                .iter()
                .map(type_to_string)
                .collect::<Vec<_>>()
                .join(", ");
            format!("Function[{}, {}]", params, type_to_string(ret))
        }
        Type::Named(name, args) => named_to_string(name, args),
    }
}

/// Renders a [`SimpleType`] (the parser's encoding of a type declaration's
/// right-hand side) into the same compact string form as [`type_to_string`].
pub fn simple_type_to_string(simple: &SimpleType) -> String {
    named_to_string(&simple.name, &simple.type_args)
}

fn named_to_string(name: &str, args: &[Type]) -> String {
    if args.is_empty() {
        name.to_string()
    } else {
        let args = args.iter().map(type_to_string).collect::<Vec<_>>().join(", ");
        format!("{}[{}]", name, args)
    }
}

#[derive(Clone, Debug)]
pub struct FunctionSignature {
    pub parameters: Vec<TypeStr>,
    pub return_type: TypeStr,
}

/// The checker's three-layer environment: variable bindings, function
/// signatures, and the alias table used to resolve type declarations
/// (`NAME -> <resolved string>`) one step at a time during compatibility
/// checks.
#[derive(Clone, Debug, Default)]
pub struct TypeEnvironment {
    pub vars: FxHashMap<String, TypeStr>,
    pub functions: FxHashMap<String, FunctionSignature>,
    pub aliases: FxHashMap<String, String>,
}

impl TypeEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup_var(&self, name: &str) -> Option<&TypeStr> {
        self.vars.get(name)
    }
}

/// `a` is compatible with `b` iff they are equal strings, either is
/// `"Unknown"`, `a = "Int"` and `b = "Float"` (promotable), or a chain of
/// alias resolutions through the type declaration table reaches a
/// compatible pair.
pub fn compatible(a: &str, b: &str, env: &TypeEnvironment) -> bool {
    let mut seen = FxHashSet::default();
    compatible_inner(a, b, env, &mut seen)
}

fn compatible_inner(a: &str, b: &str, env: &TypeEnvironment, seen: &mut FxHashSet<(String, String)>) -> bool {
    if a == b || a == "Unknown" || b == "Unknown" {
        return true;
    }
    if a == "Int" && b == "Float" {
        return true;
    }
    if !seen.insert((a.to_string(), b.to_string())) {
        return false;
    }
    if let Some(resolved) = env.aliases.get(a) {
        if compatible_inner(resolved, b, env, seen) {
            return true;
        }
    }
    if let Some(resolved) = env.aliases.get(b) {
        if compatible_inner(a, resolved, env, seen) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pact_ast::PrimitiveType;

    #[test]
    fn primitive_renders_to_its_name() {
        assert_eq!(type_to_string(&Type::Primitive(PrimitiveType::Int)), "Int");
    }

    #[test]
    fn array_and_result_render_bracketed() {
        assert_eq!(
            type_to_string(&Type::Array(Box::new(Type::Primitive(PrimitiveType::Int)))),
            "Array[Int]"
        );
        assert_eq!(
            type_to_string(&Type::Result(
                Box::new(Type::Primitive(PrimitiveType::Int)),
                Box::new(Type::Primitive(PrimitiveType::String))
            )),
            "Result[Int, String]"
        );
    }

    #[test]
    fn int_is_compatible_with_float_but_not_reverse() {
        let env = TypeEnvironment::new();
        assert!(compatible("Int", "Float", &env));
        assert!(!compatible("Float", "Int", &env));
    }

    #[test]
    fn unknown_is_compatible_with_anything() {
        let env = TypeEnvironment::new();
        assert!(compatible("Unknown", "String", &env));
        assert!(compatible("Bool", "Unknown", &env));
    }

    #[test]
    fn alias_chain_resolves_through_the_table() {
        let mut env = TypeEnvironment::new();
        env.aliases.insert("PositiveInt".to_string(), "Int".to_string());
        assert!(compatible("PositiveInt", "Int", &env));
        assert!(compatible("PositiveInt", "Float", &env));
    }

    #[test]
    fn cyclic_aliases_do_not_infinite_loop() {
        let mut env = TypeEnvironment::new();
        env.aliases.insert("A".to_string(), "B".to_string());
        env.aliases.insert("B".to_string(), "A".to_string());
        assert!(!compatible("A", "String", &env));
    }
}
