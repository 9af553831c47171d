//! Supertraits and default methods.
//!
//! Rust has no class inheritance; shared behaviour comes from default
//! trait methods, and "B extends A" becomes the supertrait bound `B: A`.

trait Animal {
    fn name(&self) -> String;

    // Default method: every implementor gets this for free and may
    // override it.
    fn speak(&self) -> String {
        format!("{} makes a sound", self.name())
    }
}

// Supertrait: anything that is a Pet must also be an Animal.
trait Pet: Animal {
    fn owner(&self) -> String;
}

struct Dog {
    name: String,
    owner: String,
}

struct Crow;

impl Animal for Dog {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn speak(&self) -> String {
        format!("{} barks", self.name)
    }
}

impl Pet for Dog {
    fn owner(&self) -> String {
        self.owner.clone()
    }
}

impl Animal for Crow {
    fn name(&self) -> String {
        "crow".into()
    }
    // No speak override: the default method runs.
}

fn introduce(pet: &impl Pet) {
    // A Pet bound gives access to the Animal methods too.
    println!("{} (owned by {})", pet.speak(), pet.owner());
}

pub fn run() {
    println!("Supertraits and default methods\n");

    let rex = Dog {
        name: "Rex".into(),
        owner: "Asha".into(),
    };
    let crow = Crow;

    introduce(&rex);
    println!("{} (default method)", crow.speak());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn override_beats_default() {
        let dog = Dog {
            name: "Rex".into(),
            owner: "Asha".into(),
        };
        assert_eq!(dog.speak(), "Rex barks");
        assert_eq!(Crow.speak(), "crow makes a sound");
    }
}
