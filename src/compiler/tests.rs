use crate::{chunk::OpCode, compiler::CompilationContext, value::objects::FunctionObject};

fn compile(code: &str) -> Result<FunctionObject, super::errors::CompilerError> {
    CompilationContext::new(code).compile()
}

#[test]
fn var_declaration_requires_an_initializer() {
    // The diagnostic itself goes to stderr, not into the returned `Err`
    // (see `Parser::report_at`); the only thing the caller can observe is
    // that the pass recorded at least one error.
    let result = compile("var a;");
    assert!(result.is_err());
}

#[test]
fn var_declaration_with_initializer() {
    let fun_obj = compile("var a = 10 + 20;").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // 10
            OpCode::OpConstant as u8,
            1, // 20
            OpCode::OpAdd as u8,
            OpCode::OpDefineGlobal as u8,
            2, // name constant "a"
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn boolean_and_null_literals_go_through_constant_pool_or_op_null() {
    let fun_obj = compile("true; false; null;").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0,
            OpCode::OpPop as u8,
            OpCode::OpConstant as u8,
            1,
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
    assert_eq!(fun_obj.chunk.constants[0], crate::value::Value::Bool(true));
    assert_eq!(fun_obj.chunk.constants[1], crate::value::Value::Bool(false));
}

#[test]
fn if_else_emits_balanced_jumps() {
    let fun_obj = compile("if (true) 1; else 2;").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // true
            OpCode::OpJumpIfFalse as u8,
            0,
            7,
            OpCode::OpPop as u8,
            OpCode::OpConstant as u8,
            1, // 1
            OpCode::OpPop as u8,
            OpCode::OpJump as u8,
            0,
            4,
            OpCode::OpPop as u8,
            OpCode::OpConstant as u8,
            2, // 2
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn while_loop_emits_backward_jump() {
    let fun_obj = compile("while (false) 1;").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // false
            OpCode::OpJumpIfFalse as u8,
            0,
            7,
            OpCode::OpPop as u8,
            OpCode::OpConstant as u8,
            1, // 1
            OpCode::OpPop as u8,
            OpCode::OpLoop as u8,
            0,
            12,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn block_scoped_locals_are_popped_on_scope_exit() {
    let fun_obj = compile("{ var a = 1; var b = 2; }").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // 1, a's initializer
            OpCode::OpConstant as u8,
            1, // 2, b's initializer
            OpCode::OpPop as u8,
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn redeclaring_a_local_in_the_same_scope_is_an_error() {
    let result = compile("{ var a = 1; var a = 2; }");
    assert!(result.is_err());
}

#[test]
fn shadowing_in_a_nested_block_is_allowed() {
    let result = compile("{ var a = 1; { var a = 2; } }");
    assert!(result.is_ok());
}

#[test]
fn function_declaration_and_call() {
    let fun_obj = compile(
        "
        fun add(a, b) { return a + b; }
        add(1, 2);
        ",
    )
    .unwrap();

    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // the `add` function object
            OpCode::OpDefineGlobal as u8,
            1, // "add" name constant
            OpCode::OpGetGlobal as u8,
            2, // "add" name constant, looked up again for the call
            OpCode::OpConstant as u8,
            3, // 1
            OpCode::OpConstant as u8,
            4, // 2
            OpCode::OpCall2 as u8,
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );

    let inner = fun_obj.chunk.constants[0].as_function_ref();
    assert_eq!(inner.arity, 2);
    assert_eq!(
        inner.chunk.code,
        vec![
            OpCode::OpGetLocal as u8,
            0,
            OpCode::OpGetLocal as u8,
            1,
            OpCode::OpAdd as u8,
            OpCode::OpReturn as u8,
            // Dead code: `end_scope` popping the two parameter locals
            // (`a`, `b`) after the body's own `return`, which the VM never
            // falls through to reach.
            OpCode::OpPop as u8,
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn function_is_not_visible_inside_its_own_body() {
    // The function's own name is declared only after its body is compiled,
    // so a bare reference to it inside the body resolves as an undefined
    // global rather than a recursive call. The VM surfaces that as a
    // runtime error, not a compile error, so this should compile fine.
    let result = compile("fun f() { f(); } f();");
    assert!(result.is_ok());
}

#[test]
fn call_with_more_than_max_arity_arguments_is_a_capacity_error() {
    let args = (0..9).map(|n| n.to_string()).collect::<Vec<_>>().join(", ");
    let source = format!("fun f() {{}} f({args});");
    assert!(compile(&source).is_err());
}

#[test]
fn logical_and_or_short_circuit_with_jumps() {
    let fun_obj = compile("true and false;").unwrap();
    assert_eq!(
        fun_obj.chunk.code,
        vec![
            OpCode::OpConstant as u8,
            0, // true
            OpCode::OpJumpIfFalse as u8,
            0,
            3,
            OpCode::OpPop as u8,
            OpCode::OpConstant as u8,
            1, // false
            OpCode::OpPop as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}

#[test]
fn invalid_assignment_target_is_an_expression_error() {
    let result = compile("1 + 2 = 3;");
    assert!(result.is_err());
}

#[test]
fn return_without_value_emits_null() {
    let fun_obj = compile("fun f() { return; }").unwrap();
    let inner = fun_obj.chunk.constants[0].as_function_ref();
    assert_eq!(
        inner.chunk.code,
        vec![
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
            OpCode::OpNull as u8,
            OpCode::OpReturn as u8,
        ]
    );
}
