//! Knowledge bases shared by the integration tests

#![allow(dead_code)]

use clausal::{KnowledgeBase, Sentence, Term};

pub fn c(name: &str) -> Term {
    Term::constant(name)
}

pub fn v(name: &str) -> Term {
    Term::var(name)
}

pub fn p(name: &str, args: Vec<Term>) -> Sentence {
    Sentence::predicate(name, args)
}

pub fn and_all(sentences: Vec<Sentence>) -> Sentence {
    Sentence::conjunction(sentences).expect("at least one conjunct")
}

/// `Missile(M1)` and `Missile(x) => Weapon(x)`
pub fn weapons_kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    kb.tell(&p("Missile", vec![c("M1")])).unwrap();
    kb.tell(&Sentence::forall(
        &["x"],
        Sentence::implies(p("Missile", vec![v("x")]), p("Weapon", vec![v("x")])),
    ))
    .unwrap();
    kb
}

/// "The law says that it is a crime for an American to sell weapons to
/// hostile nations. The country Nono, an enemy of America, has some
/// missiles, and all of its missiles were sold to it by Colonel West, who is
/// American."
pub fn west_kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    let sentences = vec![
        Sentence::implies(
            and_all(vec![
                p("American", vec![v("x")]),
                p("Weapon", vec![v("y")]),
                p("Sells", vec![v("x"), v("y"), v("z")]),
                p("Hostile", vec![v("z")]),
            ]),
            p("Criminal", vec![v("x")]),
        ),
        p("Owns", vec![c("Nono"), c("M1")]),
        p("Missile", vec![c("M1")]),
        Sentence::implies(
            and_all(vec![
                p("Missile", vec![v("x")]),
                p("Owns", vec![c("Nono"), v("x")]),
            ]),
            p("Sells", vec![c("West"), v("x"), c("Nono")]),
        ),
        Sentence::implies(p("Missile", vec![v("x")]), p("Weapon", vec![v("x")])),
        Sentence::implies(
            p("Enemy", vec![v("x"), c("America")]),
            p("Hostile", vec![v("x")]),
        ),
        p("American", vec![c("West")]),
        p("Enemy", vec![c("Nono"), c("America")]),
    ];
    kb.tell_all(&sentences).unwrap();
    kb
}

/// "Everyone who loves all animals is loved by someone. Anyone who kills an
/// animal is loved by no one. Jack loves all animals. Either Jack or
/// Curiosity killed the cat, who is named Tuna."
pub fn loves_animal_kb() -> KnowledgeBase {
    let mut kb = KnowledgeBase::new();
    let sentences = vec![
        Sentence::forall(
            &["x"],
            Sentence::implies(
                Sentence::forall(
                    &["y"],
                    Sentence::implies(p("Animal", vec![v("y")]), p("Loves", vec![v("x"), v("y")])),
                ),
                Sentence::exists(&["y"], p("Loves", vec![v("y"), v("x")])),
            ),
        ),
        Sentence::forall(
            &["x"],
            Sentence::implies(
                Sentence::exists(
                    &["z"],
                    Sentence::and(p("Animal", vec![v("z")]), p("Kills", vec![v("x"), v("z")])),
                ),
                Sentence::forall(&["y"], Sentence::not(p("Loves", vec![v("y"), v("x")]))),
            ),
        ),
        Sentence::forall(
            &["x"],
            Sentence::implies(p("Animal", vec![v("x")]), p("Loves", vec![c("Jack"), v("x")])),
        ),
        Sentence::or(
            p("Kills", vec![c("Jack"), c("Tuna")]),
            p("Kills", vec![c("Curiosity"), c("Tuna")]),
        ),
        p("Cat", vec![c("Tuna")]),
        Sentence::forall(
            &["x"],
            Sentence::implies(p("Cat", vec![v("x")]), p("Animal", vec![v("x")])),
        ),
    ];
    kb.tell_all(&sentences).unwrap();
    kb
}
