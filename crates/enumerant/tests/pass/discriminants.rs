use enumerant::Enumeration as _;

#[enumerant::enumeration]
#[derive(Debug, PartialEq)]
pub enum CarBrand {
    Ford = 1,
    Toyota = 3,
    Mitsubishi = 2,
    Lada = -4,
}

fn main() {
    let order: Vec<_> = CarBrand::iter().collect();
    assert_eq!(
        order,
        [&CarBrand::Lada, &CarBrand::Ford, &CarBrand::Mitsubishi, &CarBrand::Toyota],
    );
    assert_eq!(CarBrand::Toyota.constant().to_string(), "CarBrand.Toyota(value=3)");
}
