//! Editor language templates
//!
//! Codeforces language ids offered by the editor, each with a display name and
//! starter code. Unknown ids fall back to the first entry.

use serde::Serialize;

/// Starter code for one Codeforces language id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageTemplate {
    pub id: i32,
    pub name: &'static str,
    pub boilerplate: &'static str,
}

impl LanguageTemplate {
    /// Source file extension; doubles as the highlighter language tag
    pub fn extension(&self) -> &'static str {
        extension_for(self.id)
    }
}

pub const LANGUAGE_TEMPLATES: &[LanguageTemplate] = &[
    LanguageTemplate {
        id: 54,
        name: "C++ (GCC 9.2.0)",
        boilerplate: "#include <iostream>\n#include <vector>\n#include <algorithm>\nusing namespace std;\n\nint main() {\n    // Your code here\n\n    return 0;\n}",
    },
    LanguageTemplate {
        id: 62,
        name: "Java (OpenJDK 13.0.1)",
        boilerplate: "import java.util.*;\nimport java.io.*;\n\npublic class Main {\n    public static void main(String[] args) {\n        Scanner sc = new Scanner(System.in);\n        // Your code here\n\n    }\n}",
    },
    LanguageTemplate {
        id: 71,
        name: "Python (3.8.1)",
        boilerplate: "# Your code here\n\n",
    },
    LanguageTemplate {
        id: 75,
        name: "C (GCC 9.2.0)",
        boilerplate: "#include <stdio.h>\n#include <stdlib.h>\n\nint main() {\n    // Your code here\n\n    return 0;\n}",
    },
    LanguageTemplate {
        id: 63,
        name: "JavaScript (Node.js 12.14.0)",
        boilerplate: "const readline = require('readline');\nconst rl = readline.createInterface({\n    input: process.stdin,\n    output: process.stdout\n});\n\n// Your code here\n",
    },
    LanguageTemplate {
        id: 70,
        name: "Python (2.7.17)",
        boilerplate: "# Your code here\n\n",
    },
    LanguageTemplate {
        id: 50,
        name: "C# (Mono 6.6.0.161)",
        boilerplate: "using System;\nusing System.Linq;\nusing System.Collections.Generic;\n\nclass Program {\n    static void Main() {\n        // Your code here\n\n    }\n}",
    },
    LanguageTemplate {
        id: 60,
        name: "Go (1.13.5)",
        boilerplate: "package main\n\nimport (\n    \"fmt\"\n)\n\nfunc main() {\n    // Your code here\n\n}",
    },
    LanguageTemplate {
        id: 73,
        name: "Rust (1.40.0)",
        boilerplate: "use std::io;\n\nfn main() {\n    // Your code here\n\n}",
    },
];

/// Template for a language id, falling back to the first template
pub fn template_for(language_id: i32) -> &'static LanguageTemplate {
    LANGUAGE_TEMPLATES
        .iter()
        .find(|t| t.id == language_id)
        .unwrap_or(&LANGUAGE_TEMPLATES[0])
}

/// File extension for a language id (`txt` when unknown)
pub fn extension_for(language_id: i32) -> &'static str {
    match language_id {
        54 | 75 => "cpp",
        62 => "java",
        71 | 70 => "py",
        63 => "js",
        50 => "cs",
        60 => "go",
        73 => "rs",
        _ => "txt",
    }
}
