/// Asserts that two floating point values are within `epsilon` of each
/// other (`0.0005` when omitted).
///
/// Scores go through `f64` internally and are handed out as `f32`, so exact
/// equality is rarely what a test wants.
///
/// # Example
///
/// ```rust
/// use lm_similarity::assert_nearly_equals;
///
/// # fn main() {
/// assert_nearly_equals!(0.1f32 + 0.2f32, 0.3f32);
/// assert_nearly_equals!(6.0f64 / 101.0f64, 0.0594f64, 0.0001f64);
/// # }
/// ```
#[macro_export]
macro_rules! assert_nearly_equals {
    ($left:expr, $right:expr) => {{
        $crate::assert_nearly_equals!($left, $right, 0.0005);
    }};
    ($left:expr, $right:expr, $epsilon:expr) => {{
        match (&$left, &$right, &$epsilon) {
            (left_val, right_val, epsilon_val) => {
                let diff = (left_val - right_val).abs();
                if diff > *epsilon_val {
                    panic!(
                        r#"assertion failed: `abs(left-right)>epsilon`
    left: `{:?}`,
   right: `{:?}`,
 epsilon: `{:?}`"#,
                        &*left_val, &*right_val, &*epsilon_val
                    )
                }
            }
        }
    }};
}
