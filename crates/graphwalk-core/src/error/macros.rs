//! Error macros for graphwalk

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for creating invalid maze errors
#[macro_export]
macro_rules! bail_maze {
    ($($arg:tt)*) => {
        return Err($crate::error::GraphError::invalid_maze(format!($($arg)*)))
    };
}
