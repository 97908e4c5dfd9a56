use crate::model::dimensions::Dimensions;

/// 尺寸不完整时显示的占位符
pub const PLACEHOLDER: &str = "...";

/// 最大公约数
pub fn gcd(a: u32, b: u32) -> u32 {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let t = b;
        b = a % b;
        a = t;
    }
    a
}

/// 约分到最简整数比，结果两项互质
pub fn reduce(dims: Dimensions) -> (u32, u32) {
    let divisor = gcd(dims.width, dims.height);
    (dims.width / divisor, dims.height / divisor)
}

/// 最简比例文本 "W:H"；任一边缺失或为 0 时返回占位符
pub fn display_ratio(width: Option<u32>, height: Option<u32>) -> String {
    match Dimensions::from_slots(width, height) {
        Some(dims) => {
            let (w, h) = reduce(dims);
            format!("{w}:{h}")
        }
        None => PLACEHOLDER.to_string(),
    }
}
