use enumerant::{EnumType, Enumeration as _};

#[enumerant::enumeration]
enum Planet {
    Mercury = 1,
    Venus = 2,
    Earth = 3,
}

fn main() -> enumerant::Result<()> {
    let colour = EnumType::declare("Colour", |ns| {
        ns.assign("_doc", "primary colours");
        ns.declare("red");
        ns.declare("blue");
        ns.declare("yellow");
    })?;

    for member in &colour {
        println!("{member} -> {}", colour.next(member)?);
    }

    let mut planet = Planet::Mercury.constant();
    for _ in 0..4 {
        println!("{planet}");
        planet = Planet::enum_type().next(planet)?;
    }

    Ok(())
}
