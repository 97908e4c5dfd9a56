pub mod dimensions;
pub mod state;

/// 0 视为未设置
pub(crate) fn nonzero(value: u32) -> Option<u32> {
    (value != 0).then_some(value)
}
