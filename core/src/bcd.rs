/// Splits `value` into its decimal digits, most significant first.
///
/// `convert(123) == [1, 2, 3]`
pub fn convert(value: u8) -> [u8; 3] {
    let hundreds = value / 100;
    let tens = (value - hundreds * 100) / 10;
    let ones = value - hundreds * 100 - tens * 10;
    [hundreds, tens, ones]
}
