use pact_ast::Type;

pub(crate) fn format_type(ty: &Type) -> String {
    match ty {
        Type::Primitive(p) => p.name().to_string(),
        Type::Array(elem) => format!("Array[{}]", format_type(elem)),
        Type::Result(ok, err) => format!("Result[{}, {}]", format_type(ok), format_type(err)),
        Type::Function(params, ret) => {
            let params = params.iter().map(format_type).collect::<Vec<_>>().join(", ");
            format!("({params}) -> {}", format_type(ret))
        }
        Type::Named(name, args) => {
            if args.is_empty() {
                name.clone()
            } else {
                let args = args.iter().map(format_type).collect::<Vec<_>>().join(", ");
                format!("{name}[{args}]")
            }
        }
    }
}
