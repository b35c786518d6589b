//! Standard template catalogue used across tests.

use kingdom_domain::{
    Ability, Background, BackgroundId, Bulk, CharacterClass, ClassId, ClassProficiencies, Feat,
    FeatId, Item, ItemId, ItemKind, MasteryRank, Race, RaceId, Skill, SkillId, SquareSize,
};

use crate::infrastructure::memory::InMemoryTemplateRepo;

// Races
pub const DWARF: RaceId = RaceId::new(1);
pub const GNOME: RaceId = RaceId::new(2);

// Classes
pub const FIGHTER: ClassId = ClassId::new(1);
pub const WIZARD: ClassId = ClassId::new(2);

// Backgrounds
pub const FARMHAND: BackgroundId = BackgroundId::new(1);
pub const ACOLYTE: BackgroundId = BackgroundId::new(2);

// Skills
pub const ATHLETICS: SkillId = SkillId::new(1);
pub const SURVIVAL: SkillId = SkillId::new(2);
pub const MEDICINE: SkillId = SkillId::new(3);
pub const RELIGION: SkillId = SkillId::new(4);

// Feats
pub const ASSURANCE: FeatId = FeatId::new(100);
pub const TOUGHNESS: FeatId = FeatId::new(101);
pub const BATTLE_MEDICINE: FeatId = FeatId::new(102);
pub const LEGENDARY_MEDIC: FeatId = FeatId::new(103);

// Items
pub const BACKPACK: ItemId = ItemId::new(1);
pub const TORCH: ItemId = ItemId::new(2);
pub const LONGSWORD: ItemId = ItemId::new(3);
pub const CHAIN_MAIL: ItemId = ItemId::new(4);

pub fn dwarf() -> Race {
    Race::new(DWARF, "Dwarf", 10).with_speed(20)
}

pub fn gnome() -> Race {
    Race::new(GNOME, "Gnome", 8)
        .with_size(SquareSize::Small)
        .with_ability_boosts(3)
}

pub fn fighter() -> CharacterClass {
    CharacterClass::new(FIGHTER, "Fighter", 10)
        .map(|class| {
            class.with_proficiencies(ClassProficiencies {
                perception: MasteryRank::Expert,
                fortitude: MasteryRank::Expert,
                reflex: MasteryRank::Expert,
                will: MasteryRank::Train,
                class_dc: MasteryRank::Train,
                unarmored: MasteryRank::Train,
                light_armor: MasteryRank::Train,
                medium_armor: MasteryRank::Train,
                heavy_armor: MasteryRank::Train,
                unarmed_weapons: MasteryRank::Expert,
                common_weapons: MasteryRank::Expert,
                martial_weapons: MasteryRank::Expert,
                ..ClassProficiencies::default()
            })
        })
        .expect("fighter hit points are valid")
}

pub fn wizard() -> CharacterClass {
    CharacterClass::new(WIZARD, "Wizard", 6)
        .map(|class| {
            class.with_proficiencies(ClassProficiencies {
                perception: MasteryRank::Train,
                fortitude: MasteryRank::Train,
                reflex: MasteryRank::Train,
                will: MasteryRank::Expert,
                unarmored: MasteryRank::Train,
                spell_attack: MasteryRank::Train,
                ..ClassProficiencies::default()
            })
        })
        .expect("wizard hit points are valid")
}

pub fn farmhand() -> Background {
    Background::new(FARMHAND, "Farmhand", ASSURANCE, [ATHLETICS, SURVIVAL])
}

pub fn acolyte() -> Background {
    Background::new(ACOLYTE, "Acolyte", TOUGHNESS, [RELIGION, MEDICINE])
}

pub fn feats() -> Vec<Feat> {
    vec![
        Feat::new(ASSURANCE, "Assurance"),
        Feat::new(TOUGHNESS, "Toughness"),
        Feat::new(BATTLE_MEDICINE, "Battle Medicine")
            .with_prerequisite(MEDICINE, MasteryRank::Expert),
        Feat::new(LEGENDARY_MEDIC, "Legendary Medic")
            .with_prerequisite(MEDICINE, MasteryRank::Legend)
            .with_level(15),
    ]
}

pub fn skills() -> Vec<Skill> {
    vec![
        Skill::new(ATHLETICS, "Athletics", Ability::Strength),
        Skill::new(SURVIVAL, "Survival", Ability::Wisdom),
        Skill::new(MEDICINE, "Medicine", Ability::Wisdom),
        Skill::new(RELIGION, "Religion", Ability::Wisdom),
    ]
}

pub fn items() -> Vec<Item> {
    vec![
        Item::new(BACKPACK, "Backpack", Bulk::LIGHT),
        Item::new(TORCH, "Torch", Bulk::LIGHT).with_kind(ItemKind::Consumable),
        Item::new(LONGSWORD, "Longsword", Bulk::from_whole(1)).with_kind(ItemKind::Weapon),
        Item::new(CHAIN_MAIL, "Chain Mail", Bulk::from_whole(2)).with_kind(ItemKind::Armor),
    ]
}

/// Every template above, loaded into an in-memory catalogue.
pub fn catalogue() -> InMemoryTemplateRepo {
    let repo = InMemoryTemplateRepo::new();
    repo.insert_race(dwarf());
    repo.insert_race(gnome());
    repo.insert_class(fighter());
    repo.insert_class(wizard());
    repo.insert_background(farmhand());
    repo.insert_background(acolyte());
    feats().into_iter().for_each(|f| repo.insert_feat(f));
    skills().into_iter().for_each(|s| repo.insert_skill(s));
    items().into_iter().for_each(|i| repo.insert_item(i));
    repo
}
