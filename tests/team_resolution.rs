//! Integration tests for party resolution, eligibility and grouping

use std::path::PathBuf;

use monster_scroll::catalog::{Catalog, Monster, Skill};
use monster_scroll::core::combo::TypeCombo;
use monster_scroll::core::error::ScrollError;
use monster_scroll::core::types::{Element, SkillKind, TypeTag};
use monster_scroll::core::{GroupingStrategy, ScrollConfig};
use monster_scroll::team::{
    get_monster_skills, group_enabled_combos, group_skills_by_enablers,
    group_skills_by_individual_enablers, monster_enabled_combos, organize,
    sort_enabled_combos_by_source, ComboMap, EnabledSkill, EnablerCategory, Party, SkillQuery,
};

fn shipped_catalog() -> Catalog {
    let config = ScrollConfig {
        data_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data"),
        ..ScrollConfig::default()
    };
    Catalog::load(&config).expect("shipped catalogs should load")
}

fn names(skills: &[EnabledSkill]) -> Vec<String> {
    skills.iter().map(|s| s.skill.name.clone()).collect()
}

fn party<'a>(catalog: &'a Catalog, slugs: &[&str]) -> Vec<&'a Monster> {
    Party::from_slugs(catalog, slugs)
        .unwrap()
        .members()
        .to_vec()
}

fn combo(a: TypeTag, b: TypeTag) -> TypeCombo {
    TypeCombo::new(a, b).unwrap()
}

struct Trio {
    a: Monster,
    b: Monster,
    c: Monster,
}

/// A: Poison/Shield/Tank (Fire), B: Shield/Terror/Age (Water), C: Burn/Dodge/Critical (Wild)
fn trio() -> Trio {
    Trio {
        a: Monster::new("A", false, [TypeTag::Poison, TypeTag::Shield, TypeTag::Tank], vec![Element::Fire]).unwrap(),
        b: Monster::new("B", false, [TypeTag::Shield, TypeTag::Terror, TypeTag::Age], vec![Element::Water]).unwrap(),
        c: Monster::new("C", false, [TypeTag::Burn, TypeTag::Dodge, TypeTag::Critical], vec![Element::Wild]).unwrap(),
    }
}

#[test]
fn test_trio_combination_sources() {
    let t = trio();
    let slots = [&t.a, &t.b, &t.c];
    let combos = ComboMap::resolve(&t.a, &slots);

    // B also carries Shield, so it shares Poison+Shield with A
    let poison_shield = combos.get(&combo(TypeTag::Poison, TypeTag::Shield)).unwrap();
    assert_eq!(EnablerCategory::classify(&t.a, poison_shield), EnablerCategory::Mixed);

    let poison_tank = combos.get(&combo(TypeTag::Poison, TypeTag::Tank)).unwrap();
    assert_eq!(poison_tank.len(), 1);
    assert!(poison_tank[0].same_as(&t.a));

    let shield_terror = combos.get(&combo(TypeTag::Shield, TypeTag::Terror)).unwrap();
    assert_eq!(shield_terror.len(), 1);
    assert!(shield_terror[0].same_as(&t.b));
    assert_eq!(EnablerCategory::classify(&t.a, shield_terror), EnablerCategory::External);

    // Every pair needs one of A's own types
    let burn_tank = combos.get(&combo(TypeTag::Burn, TypeTag::Tank)).unwrap();
    assert!(burn_tank[0].same_as(&t.c));
    assert!(!combos.contains(&combo(TypeTag::Burn, TypeTag::Dodge)));
    assert!(!combos.contains(&combo(TypeTag::Terror, TypeTag::Age)));
}

#[test]
fn test_trio_element_gate_and_wildcard() {
    let t = trio();
    let party = [&t.a, &t.b, &t.c];
    let actions = vec![
        Skill::new("Venom Wall", SkillKind::Action, vec![TypeTag::Poison, TypeTag::Shield])
            .with_mana_cost(vec![Element::Fire]),
        Skill::new("Keen Eye", SkillKind::Action, vec![TypeTag::Critical, TypeTag::Shield])
            .with_mana_cost(vec![Element::Earth]),
    ];

    let for_a = get_monster_skills(&t.a, &party, &actions, &[], SkillQuery::default()).unwrap();
    // Keen Eye is reachable through C but costs Earth
    assert_eq!(names(&for_a), vec!["Venom Wall"]);

    // C pays for anything through Wild; it reaches Critical+Shield via A and B
    let for_c = get_monster_skills(&t.c, &party, &actions, &[], SkillQuery::default()).unwrap();
    assert_eq!(names(&for_c), vec!["Keen Eye"]);
    assert_eq!(for_c[0].category(&t.c), EnablerCategory::External);
    assert_eq!(for_c[0].enabled_by.len(), 2);
}

#[test]
fn test_trio_group_combos_cover_every_member() {
    let t = trio();
    let all = group_enabled_combos(&[&t.a, &t.b, &t.c]).unwrap();
    assert_eq!(all.len(), 3);
    assert!(all[1].monster.same_as(&t.b));

    let one = monster_enabled_combos(&t.a, &[&t.a, &t.b, &t.c]).unwrap();
    let sorted = sort_enabled_combos_by_source(&one.enabled_combos, &t.a);
    let categories: Vec<EnablerCategory> = sorted.iter().map(|c| c.category(&t.a)).collect();
    let mut expected = categories.clone();
    expected.sort();
    assert_eq!(categories, expected);
    assert_eq!(sorted.last().unwrap().key(), "Poison+Tank");

    assert!(matches!(
        group_enabled_combos(&[&t.a, &t.b]),
        Err(ScrollError::ContractViolation(_))
    ));
    assert!(matches!(
        monster_enabled_combos(&t.c, &[&t.a, &t.b, &t.b]),
        Err(ScrollError::ContractViolation(_))
    ));
}

#[test]
fn test_shipped_party_for_nixe() {
    let catalog = shipped_catalog();
    let members = party(&catalog, &["Nixe", "Wolpertinger", "Cherufe"]);
    let nixe = members[0];

    let skills = get_monster_skills(
        nixe,
        &members,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();

    assert_eq!(
        names(&skills),
        vec!["Aging Mist", "Dread Aegis", "Toxic Plating", "Venom Bulwark"]
    );
    assert_eq!(skills[0].category(nixe), EnablerCategory::External);
    assert_eq!(skills[3].category(nixe), EnablerCategory::Mixed);
    assert!(skills.iter().all(|s| s.skill.is_maverick()));
}

#[test]
fn test_padding_only_adds_self_skills() {
    let catalog = shipped_catalog();
    for monster in catalog.monsters() {
        let alone = get_monster_skills(
            monster,
            &[monster],
            catalog.actions(),
            catalog.traits(),
            SkillQuery::all_skills(),
        )
        .unwrap();
        let tripled = get_monster_skills(
            monster,
            &[monster, monster, monster],
            catalog.actions(),
            catalog.traits(),
            SkillQuery::all_skills(),
        )
        .unwrap();

        assert_eq!(names(&alone), names(&tripled));
        assert!(alone
            .iter()
            .all(|s| s.category(monster) == EnablerCategory::SelfOnly));
    }
}

#[test]
fn test_wild_monster_ignores_mana_cost() {
    let catalog = shipped_catalog();
    let members = party(&catalog, &["Minokawa", "Cherufe"]);
    let skills = get_monster_skills(
        members[0],
        &members,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();

    assert_eq!(names(&skills), vec!["Ember Reflexes", "Precise Ember"]);
    assert!(skills.iter().all(|s| s.enabled_by[0].name == "Cherufe"));
}

#[test]
fn test_no_attack_monster_keeps_support_only() {
    let catalog = shipped_catalog();
    let members = party(&catalog, &["Sphinx", "Cherufe", "Djinn"]);
    let sphinx = members[0];

    let skills = get_monster_skills(
        sphinx,
        &members,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::all_skills(),
    )
    .unwrap();

    assert!(skills.iter().all(|s| !s.skill.is_attack()));
    assert_eq!(names(&skills), vec!["Cleansing Gust"]);

    // The same types without the name would keep the attacks
    let lookalike = Monster::new("Lookalike", false, sphinx.types, sphinx.elements.clone()).unwrap();
    let lookalike_party = [&lookalike, members[1], members[2]];
    let unrestricted = get_monster_skills(
        &lookalike,
        &lookalike_party,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();
    assert_eq!(
        names(&unrestricted),
        vec!["Aether Lance", "Cleansing Gust", "Sapping Riddle"]
    );
}

#[test]
fn test_cooking_skills_belong_to_one_monster() {
    let catalog = shipped_catalog();

    let domovoy = catalog.monster_by_slug("Domovoy").unwrap();
    let own = get_monster_skills(
        domovoy,
        &[domovoy],
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();
    assert_eq!(names(&own), vec!["Camp Cook", "Hearth Stew"]);

    // Minokawa reaches both combos through Domovoy and pays through Wild
    let members = party(&catalog, &["Minokawa", "Domovoy"]);
    let borrowed = get_monster_skills(
        members[0],
        &members,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();
    assert!(borrowed.iter().all(|s| !s.skill.is_cooking()));
    assert!(borrowed.is_empty());
}

#[test]
fn test_grouping_strategies_on_shifted_pair() {
    let catalog = shipped_catalog();
    let members = party(&catalog, &["Djinn", "Djinn-shifted", "Cherufe"]);
    let djinn = members[0];

    let skills = get_monster_skills(
        djinn,
        &members,
        catalog.actions(),
        catalog.traits(),
        SkillQuery::default(),
    )
    .unwrap();
    // Aether Lance is reachable through Cherufe but costs Earth
    assert_eq!(names(&skills), vec!["Ember Reflexes", "Gale Feint"]);

    let shared = group_skills_by_enablers(&skills, djinn);
    let keys: Vec<&str> = shared.iter().map(|g| g.group_key.as_str()).collect();
    assert_eq!(keys, vec!["Cherufe", "Djinn|Djinn-shifted"]);
    assert_eq!(shared[1].category, EnablerCategory::Mixed);
    let total: usize = shared.iter().map(|g| g.len()).sum();
    assert_eq!(total, skills.len());

    let per_monster = group_skills_by_individual_enablers(&skills, djinn);
    let keys: Vec<&str> = per_monster.iter().map(|g| g.group_key.as_str()).collect();
    assert_eq!(keys, vec!["Cherufe", "Djinn-shifted", "Djinn"]);
    assert_eq!(per_monster[2].category, EnablerCategory::SelfOnly);
    let gale_feint_groups = per_monster
        .iter()
        .filter(|g| g.skills.iter().any(|s| s.skill.name == "Gale Feint"))
        .count();
    assert_eq!(gale_feint_groups, 2);

    let organized = organize(GroupingStrategy::Shared, &skills, djinn);
    assert_eq!(organized.len(), shared.len());
}

#[test]
fn test_party_contract() {
    let catalog = shipped_catalog();
    let members = party(&catalog, &["Nixe", "Wolpertinger"]);
    let cherufe = catalog.monster_by_slug("Cherufe").unwrap();

    assert!(matches!(
        get_monster_skills(cherufe, &members, catalog.actions(), catalog.traits(), SkillQuery::default()),
        Err(ScrollError::ContractViolation(_))
    ));
    assert!(matches!(
        Party::from_slugs(&catalog, &["Nixe", "Nobody"]),
        Err(ScrollError::UnknownMonster(name)) if name == "Nobody"
    ));
    assert!(matches!(
        Party::from_slugs(&catalog, &["", " "]),
        Err(ScrollError::ContractViolation(_))
    ));
}
