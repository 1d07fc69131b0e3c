use std::fmt::Display;

use crate::value::objects::FunctionObject;

pub enum FunctionType {
    Function(Box<FunctionObject>),
    Script(Box<FunctionObject>),
}

impl Display for FunctionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Script(s) => {
                write!(f, "Top-Level Script: {s}")
            }
            Self::Function(fun) => {
                write!(f, "Function: {fun}")
            }
        }
    }
}

impl FunctionType {
    #[must_use]
    pub fn default_function() -> Self {
        Self::Function(Box::new(FunctionObject::new()))
    }

    #[must_use]
    pub fn default_script() -> Self {
        Self::Script(Box::new(FunctionObject::new()))
    }

    #[must_use]
    pub fn is_script(&self) -> bool {
        matches!(self, Self::Script(_))
    }

    #[must_use]
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Function(_))
    }

    /// Borrows the function-in-progress this frame owns, regardless of
    /// whether it's the top-level script or a nested function.
    pub fn function(&self) -> &FunctionObject {
        match self {
            Self::Function(f) | Self::Script(f) => f,
        }
    }

    pub fn function_mut(&mut self) -> &mut FunctionObject {
        match self {
            Self::Function(f) | Self::Script(f) => f,
        }
    }
}

impl From<FunctionType> for FunctionObject {
    fn from(val: FunctionType) -> FunctionObject {
        match val {
            FunctionType::Function(fun) => *fun,
            FunctionType::Script(script) => *script,
        }
    }
}

impl From<FunctionObject> for FunctionType {
    fn from(value: FunctionObject) -> Self {
        FunctionType::Function(Box::new(value))
    }
}
