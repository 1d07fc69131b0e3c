use crate::value::Value;
use crate::vm::VM;

#[test]
fn interpret_source_defines_a_global() {
    let mut vm = VM::new();
    vm.interpret_source("var a = 1 + 2;").unwrap();
    assert_eq!(vm.globals.get("a"), Some(&Value::Number(3.0)));
}

#[test]
fn interpret_source_runs_a_function_call() {
    let mut vm = VM::new();
    vm.interpret_source("fun add(a, b) { return a + b; } var result = add(1, 2);")
        .unwrap();
    assert_eq!(vm.globals.get("result"), Some(&Value::Number(3.0)));
}

#[test]
fn interpret_source_surfaces_a_compile_error() {
    let mut vm = VM::new();
    let result = vm.interpret_source("var a;");
    assert!(result.is_err());
}

#[test]
fn interpret_source_surfaces_a_runtime_error() {
    let mut vm = VM::new();
    let result = vm.interpret_source("1 + true;");
    assert!(result.is_err());
}
