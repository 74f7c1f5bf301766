#![cfg(test)]
use std::str::FromStr;

use kennel_common::animal::{Animal, Dog, Speak};
use kennel_common::creature::Creature;
use kennel_core::{Chorus, Transcript, script};

fn speak_once(speaker: &dyn Speak) -> anyhow::Result<String> {
    let mut transcript = Transcript::new();
    speaker.speak(&mut transcript)?;
    let mut lines = transcript.into_lines();
    assert_eq!(lines.len(), 1, "speak must emit exactly one line");
    Ok(lines.remove(0))
}

/// Scenarios from the original walkthrough, run through the generic
/// `&dyn Speak` interface so the dog's own variant has to be picked at runtime.
#[test]
fn override_scenarios() -> anyhow::Result<()> {
    assert_eq!(
        speak_once(&Dog::new("Barkface", "Frenchie"))?,
        "Barkface, the Frenchie, barks."
    );
    assert_eq!(
        speak_once(&Dog::new("Flam", "Giggadoodle"))?,
        "Flam, the Giggadoodle, barks."
    );
    assert_eq!(speak_once(&Animal::new("Generic"))?, "Generic makes a noise.");
    Ok(())
}

#[test]
fn dog_never_uses_base_phrasing() -> anyhow::Result<()> {
    let pairs = [("Rex", "Beagle"), ("", ""), ("Ünïcode", "Spitz, Finnish"), ("a b", "c.d")];

    for (name, breed) in pairs {
        let dog = Dog::new(name, breed);
        let line = speak_once(&dog)?;

        assert_eq!(line, format!("{name}, the {breed}, barks."));
        assert_ne!(line, format!("{name} makes a noise."));
        assert_eq!(dog.name(), name);
        assert_eq!(dog.breed(), breed);
    }
    Ok(())
}

#[test]
fn repeated_speak_is_stable() -> anyhow::Result<()> {
    let speaker: Box<dyn Speak> = Box::new(Dog::new("Flam", "Giggadoodle"));
    let first = speak_once(speaker.as_ref())?;
    for _ in 0..5 {
        assert_eq!(speak_once(speaker.as_ref())?, first);
    }
    Ok(())
}

#[test]
fn scripted_demo_output() -> anyhow::Result<()> {
    let mut transcript = Transcript::new();
    let spoken = script::run(&mut transcript)?;

    assert_eq!(spoken, 2);
    assert_eq!(
        transcript.lines(),
        ["Barkface, the Frenchie, barks.", "Flam, the Giggadoodle, barks."]
    );
    Ok(())
}

#[test]
fn chorus_from_command_line_descriptors() -> anyhow::Result<()> {
    let chorus: Chorus = ["Generic", "dog:Barkface:Frenchie", "animal:Flam", "dog:Rex"]
        .into_iter()
        .map(Creature::from_str)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter()
        .collect();

    let mut transcript = Transcript::new();
    chorus.perform(&mut transcript)?;

    assert_eq!(
        transcript.lines(),
        [
            "Generic makes a noise.",
            "Barkface, the Frenchie, barks.",
            "Flam makes a noise.",
            "Rex, the , barks.",
        ]
    );
    Ok(())
}
