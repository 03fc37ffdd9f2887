//! C++ keyword set

/// Reserved words plus the preprocessor directives editors usually color
pub const KEYWORDS: &[&str] = &[
    "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
    "enum", "extern", "float", "for", "goto", "if", "int", "long", "register", "return",
    "short", "signed", "sizeof", "static", "struct", "switch", "typedef", "union", "unsigned",
    "void", "volatile", "while", "class", "namespace", "template", "typename", "public",
    "private", "protected", "virtual", "bool", "true", "false", "nullptr", "this", "new",
    "delete", "using", "include", "define", "ifdef", "ifndef", "endif",
];
