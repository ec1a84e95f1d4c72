//! Bundled example programs for the playground.

/// A named example program.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub name: &'static str,
    pub code: &'static str,
}

/// The program loaded when nothing else is asked for: the one the run stub's
/// hard-coded Fibonacci recognizer targets.
pub const DEFAULT_PROGRAM: &str = r#"
# Welcome to the playground!
# Write code on the left, run or debug it on the right.

function fibonacci(n) {
    if (n <= 1) {
        return n;
    }
    return fibonacci(n-1) + fibonacci(n-2);
}

print("Fibonacci Sequence:");
for i in range(10):
    print(fibonacci(i));
"#;

pub const EXAMPLES: &[Example] = &[
    Example {
        name: "Hello World",
        code: r#"
# A first program
print("Hello, World!");
"#,
    },
    Example {
        name: "Variables",
        code: r#"
# Variables
name = "Play";
age = 1;

print("Name:", name);
print("Age:", age);
"#,
    },
    Example {
        name: "Conditionals",
        code: r#"
# Conditional statements
temperature = 25;

if temperature > 30:
    print("It's hot outside!");
elif temperature > 20:
    print("It's a nice day!");
else:
    print("It's cold outside!");
"#,
    },
    Example {
        name: "Loops",
        code: r#"
# Loops
print("For loop example:");
for i in range(5):
    print("Count:", i);

count = 0;
while count < 3:
    print("Count:", count);
    count = count + 1;
"#,
    },
    Example {
        name: "Functions",
        code: r#"
# Functions
function add(a, b) {
    return a + b;
}

sum = add(5, 3);
print("Sum:", sum);
"#,
    },
    Example {
        name: "Fibonacci",
        code: DEFAULT_PROGRAM,
    },
];

/// Case-insensitive lookup by example name.
pub fn find_example(name: &str) -> Option<&'static Example> {
    EXAMPLES.iter().find(|e| e.name.eq_ignore_ascii_case(name))
}

pub fn default_program() -> &'static str {
    DEFAULT_PROGRAM
}
