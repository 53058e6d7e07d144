use std::path::PathBuf;

use skill_content::{ContentFactory, SkillCatalog, SkillLoader};
use skill_core::{
    CatalogError, PcgRng, RustMode, SkillConfig, SkillId, SkillOracle, SkillProgress, SkillSet,
    Turn,
};

fn bundled_data() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn bundled_catalog_covers_legacy_table() {
    let catalog = ContentFactory::new(bundled_data())
        .load_catalog()
        .expect("bundled skills load");

    assert_eq!(catalog.count(), 27);
    assert_eq!(catalog.contextual_count(), 1);

    for legacy_id in 1..=27 {
        let id = SkillCatalog::from_legacy_int(legacy_id).unwrap();
        assert!(catalog.get(&id).is_ok(), "legacy skill {id} missing");
    }

    let weapon = catalog.get(&SkillId::from("weapon")).unwrap();
    assert!(weapon.is_contextual_skill());
    assert!(catalog.definition(&SkillId::from("weapon")).is_some());
    assert!(
        catalog
            .all_definitions()
            .iter()
            .all(|def| def.ident().as_str() != "weapon")
    );
}

#[test]
fn bundled_config_matches_defaults() {
    let config = ContentFactory::new(bundled_data())
        .load_config()
        .expect("bundled config loads");
    assert_eq!(config, SkillConfig::default());
}

#[test]
fn missing_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = ContentFactory::new(dir.path()).load_config().unwrap();
    assert_eq!(config, SkillConfig::default());
}

#[test]
fn duplicate_across_files_aborts_load() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("skills.ron"),
        r#"(skills: [(ident: "cooking", name: "cooking")])"#,
    )
    .unwrap();
    std::fs::create_dir(dir.path().join("skills")).unwrap();
    std::fs::write(
        dir.path().join("skills").join("extra.ron"),
        r#"(skills: [(ident: "cooking", name: "cooking again")])"#,
    )
    .unwrap();

    let err = ContentFactory::new(dir.path()).load_catalog().unwrap_err();
    let message = format!("{err}");
    assert!(message.contains("extra.ron"), "unexpected error: {message}");
    assert!(message.contains("already defined"), "unexpected error: {message}");
}

#[test]
fn unparsable_file_names_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skills.ron");
    std::fs::write(&path, "(skills: [(ident: 42)])").unwrap();

    let err = SkillLoader::load(&path).unwrap_err();
    assert!(format!("{err}").contains("skills.ron"));
}

#[test]
fn catalog_reset_invalidates_lookups() {
    let mut catalog = ContentFactory::new(bundled_data())
        .load_catalog()
        .unwrap();
    let id = SkillId::from("barter");
    assert!(catalog.get(&id).is_ok());

    catalog.reset();
    assert_eq!(catalog.get(&id), Err(CatalogError::NotFound(id)));
    assert_eq!(catalog.count(), 0);
}

#[test]
fn new_character_trains_a_random_skill() {
    let catalog = ContentFactory::new(bundled_data())
        .load_catalog()
        .unwrap();
    let config = SkillConfig::default().with_rust_mode(RustMode::Capped);
    let mut rng = PcgRng::seeded(2024);

    let mut skills = SkillSet::new();
    let picked = catalog.random_skill(&mut rng).unwrap().clone();
    assert!(!catalog.get(&picked).unwrap().is_contextual_skill());

    let progress: &mut SkillProgress = skills.entry(picked.clone());
    progress.train(250, false, &config);
    progress.practice(Turn(10), &config);

    assert_eq!(skills.level(&picked), 1);
    assert_eq!(skills.get(&picked).unwrap().last_practiced(), Turn(10));
}
