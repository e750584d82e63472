#[enumerant::enumeration(name = "Greeting")]
enum Hello {
    /// Informal.
    #[value = "hi"]
    Hi,
    #[value = 'y']
    Yo,
    #[value = true]
    r#Hey,
}

#[enumerant::enumeration]
enum Ratio {
    #[value = 0.5]
    Half,
    #[value = -1.25]
    Negative,
    #[value = 3]
    Whole,
}

fn main() {
    use enumerant::Enumeration;

    assert_eq!(Hello::Hi.constant().to_string(), "Greeting.Hi(value=\"hi\")");
    assert_eq!(Hello::Yo.constant().to_string(), "Greeting.Yo(value='y')");
    assert_eq!(Hello::Hey.constant().to_string(), "Greeting.Hey(value=true)");

    let order: Vec<_> = Ratio::iter().map(|it| it.constant().name()).collect();
    assert_eq!(order, ["Negative", "Half", "Whole"]);
}
