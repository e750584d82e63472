use enumerant::Enumeration as _;

#[enumerant::enumeration]
#[allow(non_camel_case_types)]
#[derive(Debug, PartialEq)]
enum Colour {
    red,
    blue,
    yellow,
}

fn main() {
    let names: Vec<_> = Colour::iter().map(|it| it.constant().name()).collect();
    assert_eq!(names, ["red", "blue", "yellow"]);
    assert_eq!(Colour::red.constant().to_string(), "Colour.red");
}
