use std::fmt;
use thiserror::Error;

/// The only way a behavior can fail: the handle does not support it.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnimalError {
    #[error("{0}")]
    Unsupported(&'static str),
}

pub type BehaviorResult = Result<&'static str, AnimalError>;

/// Mandatory capability set shared by every handle.
pub trait Animal {
    fn speak(&self) -> BehaviorResult;
    fn movement(&self) -> BehaviorResult;
    fn eat(&self) -> BehaviorResult;
    fn sleep(&self) -> BehaviorResult;
}

/// Optional capability; only the concrete species implement it.
pub trait Swimmer {
    fn can_swim(&self) -> bool;
}

/// The four mandatory behaviors, in invocation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    Speak,
    Move,
    Eat,
    Sleep,
}

impl Behavior {
    pub const ALL: [Behavior; 4] = [Behavior::Speak, Behavior::Move, Behavior::Eat, Behavior::Sleep];

    pub fn invoke(self, animal: &dyn Animal) -> BehaviorResult {
        match self {
            Behavior::Speak => animal.speak(),
            Behavior::Move => animal.movement(),
            Behavior::Eat => animal.eat(),
            Behavior::Sleep => animal.sleep(),
        }
    }

    /// Label printed in front of a successful result.
    pub fn label(self) -> &'static str {
        match self {
            Behavior::Speak => "Звук",
            Behavior::Move => "Движение",
            Behavior::Eat => "Еда",
            Behavior::Sleep => "Сон",
        }
    }

    /// Name used in "error while calling" lines.
    pub fn name(self) -> &'static str {
        match self {
            Behavior::Speak => "Speak",
            Behavior::Move => "Move",
            Behavior::Eat => "Eat",
            Behavior::Sleep => "Sleep",
        }
    }
}

/// Implements `Animal` and `Swimmer` for a unit struct from a row of fixed strings.
macro_rules! species {
    ($name:ident {
        speak: $speak:expr,
        movement: $movement:expr,
        eat: $eat:expr,
        sleep: $sleep:expr,
        swims: $swims:expr $(,)?
    }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name;

        impl Animal for $name {
            fn speak(&self) -> BehaviorResult {
                Ok($speak)
            }
            fn movement(&self) -> BehaviorResult {
                Ok($movement)
            }
            fn eat(&self) -> BehaviorResult {
                Ok($eat)
            }
            fn sleep(&self) -> BehaviorResult {
                Ok($sleep)
            }
        }

        impl Swimmer for $name {
            fn can_swim(&self) -> bool {
                $swims
            }
        }
    };
}

species!(Monkey {
    speak: "Кричит",
    movement: "Прыгает по деревьям",
    eat: "Ест бананы",
    sleep: "Спит в вольере",
    swims: false,
});

species!(Shark {
    speak: "не издаёт звук",
    movement: "Плавает",
    eat: "Съела мясо",
    sleep: "Спит на дне",
    swims: true,
});

species!(Eagle {
    speak: "Орёт",
    movement: "Летит",
    eat: "Ест мышь",
    sleep: "Спит в гнезде",
    swims: false,
});

species!(Bear {
    speak: "Рычит",
    movement: "Бежит",
    eat: "Ест малину",
    sleep: "Спит в берлоге",
    swims: true,
});

species!(Whale {
    speak: "Издаёт ултразвук",
    movement: "Медленно плывёт у поверхности",
    eat: "Ест планктон",
    sleep: "Спит вертикально",
    swims: true,
});

impl Monkey {
    pub fn climb(&self) -> &'static str {
        "Лазает по деревьям"
    }
}

impl Shark {
    pub fn hunt(&self) -> &'static str {
        "Охотится на рыбу"
    }
}

impl Eagle {
    pub fn fly(&self) -> &'static str {
        "Летает высоко"
    }
}

impl Bear {
    pub fn hibernate(&self) -> &'static str {
        "Спит зимой"
    }
}

impl Whale {
    pub fn dive(&self) -> &'static str {
        "Ныряет глубоко"
    }
}

/// Sentinel for keys missing from the registry. Every behavior fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UnknownAnimal;

impl Animal for UnknownAnimal {
    fn speak(&self) -> BehaviorResult {
        Err(AnimalError::Unsupported(
            "неизвестное животное не может издавать звуки",
        ))
    }
    fn movement(&self) -> BehaviorResult {
        Err(AnimalError::Unsupported(
            "неизвестное животное не может двигаться",
        ))
    }
    fn eat(&self) -> BehaviorResult {
        Err(AnimalError::Unsupported("неизвестное животное не может есть"))
    }
    fn sleep(&self) -> BehaviorResult {
        Err(AnimalError::Unsupported("неизвестное животное не может спать"))
    }
}

/// A selected species. Closed set, chosen once from the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Monkey(Monkey),
    Shark(Shark),
    Eagle(Eagle),
    Bear(Bear),
    Whale(Whale),
    Unknown(UnknownAnimal),
}

/// The one extra action a concrete species has beyond the shared traits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignatureAction {
    pub label: &'static str,
    pub description: &'static str,
}

impl Handle {
    pub fn type_name(&self) -> &'static str {
        match self {
            Handle::Monkey(_) => "Monkey",
            Handle::Shark(_) => "Shark",
            Handle::Eagle(_) => "Eagle",
            Handle::Bear(_) => "Bear",
            Handle::Whale(_) => "Whale",
            Handle::Unknown(_) => "UnknownAnimal",
        }
    }

    pub fn as_animal(&self) -> &dyn Animal {
        match self {
            Handle::Monkey(a) => a,
            Handle::Shark(a) => a,
            Handle::Eagle(a) => a,
            Handle::Bear(a) => a,
            Handle::Whale(a) => a,
            Handle::Unknown(a) => a,
        }
    }

    /// `None` when the handle lacks the swim capability.
    pub fn as_swimmer(&self) -> Option<&dyn Swimmer> {
        let swimmer: &dyn Swimmer = match self {
            Handle::Monkey(a) => a,
            Handle::Shark(a) => a,
            Handle::Eagle(a) => a,
            Handle::Bear(a) => a,
            Handle::Whale(a) => a,
            Handle::Unknown(_) => return None,
        };
        Some(swimmer)
    }

    pub fn signature_action(&self) -> Option<SignatureAction> {
        let (label, description) = match self {
            Handle::Monkey(m) => ("Лазание", m.climb()),
            Handle::Shark(s) => ("Охота", s.hunt()),
            Handle::Eagle(e) => ("Полет", e.fly()),
            Handle::Bear(b) => ("Зимовка", b.hibernate()),
            Handle::Whale(w) => ("Ныряние", w.dive()),
            Handle::Unknown(_) => return None,
        };
        Some(SignatureAction { label, description })
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}
