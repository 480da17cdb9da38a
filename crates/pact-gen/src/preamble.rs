/// The fixed runtime header every generated module starts with: two tagged
/// wrapper classes used by lowered `Result`-returning functions.
pub(crate) const PREAMBLE: &str = "\
class Success:
    def __init__(self, value):
        self.value = value


class Error:
    def __init__(self, error):
        self.error = error
";
