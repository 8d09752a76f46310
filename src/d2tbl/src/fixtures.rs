//! A small in-memory [`Tables`] shared by the unit tests

use crate::context::Tables;
use crate::tables::{
    ArmorTable, CharStatTable, GemTable, ItemStatCostTable, MiscTable, PropertyDescriptor,
    PropertyTable, Row, SkillDescTable, SkillTable, StatDescriptor, StatFunction, StringEntry,
    StringTable, WeaponTable,
};

/// Expansion row holding the ethereal marker (absolute index 22745)
const ETHEREAL_ROW: usize = 2745;

pub(crate) fn tables() -> Tables {
    Tables {
        string: base_strings(),
        expansion_string: expansion_strings(),
        patch_string: StringTable::from_pairs(&[
            ("strModEnhancedDamage", "Enhanced Damage"),
            ("Steel", "ÿc4Steel"),
            ("Rhyme", "Rhyme"),
        ]),
        weapons: weapons(),
        armor: armor(),
        misc: misc(),
        gems: gems(),
        properties: properties(),
        item_stats: item_stats(),
        char_stats: char_stats(),
        skills: skills(),
        skill_desc: skill_desc(),
    }
}

fn base_strings() -> StringTable {
    StringTable::from_pairs(&[
        ("ModStr1g", "to Minimum Damage"),
        ("ModStr1f", "to Maximum Damage"),
        ("strModEnhancedDamage", "Enhanced Damage (base)"),
        ("ModStr3a", "to Amazon Skill Levels (base)"),
        ("ModStr1e", "to Strength"),
        ("ModStr1j", "Fire Resist"),
        ("ModStr1l", "Lightning Resist"),
        ("ModStr1i", "Defense"),
        ("ModStr1u", "to Life"),
        ("ModStr4m", "Increased Attack Speed"),
        ("ModStre8b", "Hit Causes Monster to Flee"),
        ("increaseswithplaylevelX", " (Based on Character Level)"),
        ("ModStre9t", "Repairs 1 durability in %d seconds"),
        ("ItemExpansiveChancX", "%d%% Chance to cast level %d %s on attack"),
        ("ModitemAura", "Level %d %s Aura When Equipped"),
        ("ModStre9e", "(Increases during Daytime)"),
        ("ModStre9g", "(Increases near Dusk)"),
        ("ModStre9d", "(Increases during Nighttime)"),
        ("ModStre9f", "(Increases near Dawn)"),
        ("ModStr3h", "Requirements"),
        ("Moditemreanimas", "Reanimate As:"),
        ("ModStre10b", "Level"),
        ("ModStre10a", "(%d/%d Charges)"),
        ("ModStre9s", "Indestructible"),
        ("Socketable", "Socketed"),
        ("ItemStats1d", "Durability: "),
        ("ItemStats1e", "Required Strength: "),
        ("ItemStats1f", "Required Dexterity: "),
        ("ItemStats1p", "Required Level: "),
        ("WeaponDescSword", "ÿc0Sword Class"),
        ("WeaponDescAxe", "Axe Class"),
        ("The Gnasher", "The Gnasher"),
        ("Bloodfist", "Bloodfist"),
        ("Nagelring", "Nagelring"),
        ("Rainbow Facet", "Rainbow Facet"),
        ("hax", "Hand Axe"),
        ("ssd", "Short Sword"),
        ("lea", "Leather Armor"),
        ("lgl", "Leather Gloves"),
        ("rin", "Ring"),
        ("r01", "El Rune"),
        ("r02", "Eld Rune"),
        ("ModStr4u", "Life after each Kill"),
        ("ModStr2v", "Attacker Takes Damage of"),
        ("ModStr5z", "Hit Blinds Target"),
        ("ModStre9i", "Replenishes Quantity"),
        ("ModStre9u", "Repairs %d durability in %d seconds"),
    ])
}

fn expansion_strings() -> StringTable {
    let mut table = StringTable::from_pairs(&[
        ("ModStr3a", "to Amazon Skill Levels"),
        ("ModStr3d", "to Sorceress Skill Levels"),
        ("AmaOnly", "(Amazon Only)"),
        ("SorOnly", "(Sorceress Only)"),
        ("StrSklTabItem3", "+%d to Bow and Crossbow Skills"),
        ("StrSklTabItem2", "+%d to Passive and Magic Skills"),
        ("StrSklTabItem1", "+%d to Javelin and Spear Skills"),
        ("StrSklTabItem15", "+%d to Fire Spells"),
        ("StrSklTabItem14", "+%d to Lightning Spells"),
        ("StrSklTabItem13", "+%d to Cold Spells"),
        // skill names, addressed by index 20010..20014
        ("skillname0", "Attack"),
        ("skillname36", "Fire Bolt"),
        ("skillname54", "Teleport"),
        ("skillname62", "Hydra"),
        ("skillname55", "Glacial Spike"),
    ]);

    let entry = |key: &str, value: &str| StringEntry {
        key: key.to_string(),
        value: value.to_string(),
    };
    while table.len() < ETHEREAL_ROW {
        table.push(entry("x", ""));
    }
    table.push(entry("strethereal", "Ethereal (Cannot be Repaired)"));
    table
}

fn weapons() -> WeaponTable {
    WeaponTable::from_rows(vec![
        Row::with_columns(&[(0, "Hand Axe"), (1, "axe"), (3, "hax"), (5, "hax"), (25, "28")]),
        Row::with_columns(&[(0, "Expansion")]),
        Row::with_columns(&[
            (0, "Short Sword"),
            (1, "swor"),
            (3, "ssd"),
            (5, "ssd"),
            (23, "30"),
            (24, "20"),
            (25, "24"),
        ]),
    ])
    .unwrap()
}

fn armor() -> ArmorTable {
    ArmorTable::from_rows(vec![
        Row::with_columns(&[
            (0, "Leather Armor"),
            (9, "15"),
            (12, "24"),
            (18, "lea"),
            (19, "lea"),
        ]),
        Row::with_columns(&[(0, "Leather Gloves"), (10, "10"), (18, "lgl"), (19, "lgl")]),
    ])
    .unwrap()
}

fn misc() -> MiscTable {
    MiscTable::from_rows(vec![
        Row::with_columns(&[(0, "Ring"), (13, "rin"), (15, "rin")]),
        Row::with_columns(&[(0, "Jewel"), (13, "jew"), (15, "jew")]),
        Row::with_columns(&[(0, "El Rune"), (13, "r01"), (15, "r01")]),
        Row::with_columns(&[(0, "Eld Rune"), (13, "r02"), (15, "r02")]),
    ])
    .unwrap()
}

fn gems() -> GemTable {
    GemTable::from_rows(vec![
        Row::with_columns(&[
            (0, "El Rune"),
            (3, "r01"),
            (5, "dmg%"),
            (7, "15"),
            (8, "15"),
            (17, "str"),
            (19, "2"),
            (20, "2"),
            (29, "res-fire"),
            (31, "15"),
            (32, "15"),
        ]),
        Row::with_columns(&[
            (0, "Eld Rune"),
            (3, "r02"),
            (5, "dmg-min"),
            (7, "3"),
            (8, "3"),
            (9, "str"),
            (11, "1"),
            (12, "1"),
            (17, "str"),
            (19, "1"),
            (20, "1"),
            (29, "res-fire"),
            (31, "7"),
            (32, "7"),
        ]),
    ])
    .unwrap()
}

fn char_stats() -> CharStatTable {
    let class = |name: &str, all_skills: &str, tabs: [&str; 3], only: &str| {
        Row::with_columns(&[
            (0, name),
            (43, all_skills),
            (44, tabs[0]),
            (45, tabs[1]),
            (46, tabs[2]),
            (47, only),
        ])
    };
    CharStatTable::from_rows(vec![
        class(
            "Amazon",
            "ModStr3a",
            ["StrSklTabItem3", "StrSklTabItem2", "StrSklTabItem1"],
            "AmaOnly",
        ),
        class(
            "Sorceress",
            "ModStr3d",
            ["StrSklTabItem15", "StrSklTabItem14", "StrSklTabItem13"],
            "SorOnly",
        ),
        Row::with_columns(&[(0, "Expansion")]),
    ])
}

fn skills() -> SkillTable {
    let skill = |name: &str, id: &str, class: &str, desc: &str| {
        Row::with_columns(&[(0, name), (1, id), (2, class), (3, desc)])
    };
    SkillTable::from_rows(vec![
        skill("Attack", "0", "255", "0"),
        skill("skFireBolt", "36", "1", "1"),
        skill("skTeleport", "54", "1", "2"),
        skill("skHydra", "62", "1", "3"),
        skill("skGlacialSpike", "55", "1", "4"),
    ])
    .unwrap()
}

fn skill_desc() -> SkillDescTable {
    SkillDescTable::from_rows(vec![
        Row::with_columns(&[(0, "attack"), (7, "20010")]),
        Row::with_columns(&[(0, "fire bolt"), (7, "20011")]),
        Row::with_columns(&[(0, "teleport"), (7, "20012")]),
        Row::with_columns(&[(0, "hydra"), (7, "20013")]),
        Row::with_columns(&[(0, "glacial spike"), (7, "20014")]),
    ])
    .unwrap()
}

fn stat(
    name: &str,
    priority: i32,
    func: Option<i32>,
    val: Option<i32>,
    pos: &str,
) -> StatDescriptor {
    StatDescriptor {
        stat: name.to_string(),
        desc_priority: priority,
        desc_func: func,
        desc_val: val,
        desc_str_pos: pos.to_string(),
        ..Default::default()
    }
}

fn item_stats() -> ItemStatCostTable {
    let per_level = |name: &str, priority: i32, func: i32, op: i32, op_param: i32, pos: &str| StatDescriptor {
        op: Some(op),
        op_param: Some(op_param),
        desc_str2: "increaseswithplaylevelX".to_string(),
        ..stat(name, priority, Some(func), Some(1), pos)
    };

    let mut table = ItemStatCostTable::default();
    for descriptor in [
        stat("strength", 67, Some(1), Some(1), "ModStr1e"),
        stat("fireresist", 36, Some(4), Some(2), "ModStr1j"),
        stat("lightresist", 34, Some(2), Some(2), "ModStr1l"),
        stat("item_fasterattackrate", 145, Some(4), Some(1), "ModStr4m"),
        stat("item_howl", 120, Some(5), Some(2), "ModStre8b"),
        stat("mindamage", 127, Some(1), Some(1), "ModStr1g"),
        stat("maxdamage", 126, Some(1), Some(1), "ModStr1f"),
        stat("item_maxdamage_percent", 129, Some(4), Some(1), "strModEnhancedDamage"),
        per_level("item_hp_perlevel", 89, 8, 2, 2, "ModStr1u"),
        per_level("item_armor_perlevel", 92, 6, 4, 3, "ModStr1i"),
        stat("item_healafterkill", 16, Some(3), Some(1), "ModStr4u"),
        per_level("item_maxdamage_percent_perlevel", 128, 7, 5, 3, "strModEnhancedDamage"),
        per_level("item_thorns_perlevel", 13, 9, 2, 3, "ModStr2v"),
        stat("item_stupidity", 56, Some(12), Some(2), "ModStr5z"),
        stat("item_replenish_durability", 1, Some(11), None, "ModStre9t"),
        StatDescriptor {
            desc_str2: "ModStre9u".to_string(),
            ..stat("item_replenish_quantity", 2, Some(11), None, "ModStre9i")
        },
        stat("item_addclassskills", 150, Some(13), Some(1), ""),
        stat("item_addskill_tab", 151, Some(14), None, ""),
        stat("item_skillonattack", 160, Some(15), None, "ItemExpansiveChancX"),
        stat("item_aura", 159, Some(16), None, "ModitemAura"),
        stat("item_armor_bytime", 180, Some(17), Some(1), "ModStr1i"),
        stat("item_req_percent", 0, Some(20), Some(2), "ModStr3h"),
        stat("item_reanimate", 17, Some(23), None, "Moditemreanimas"),
        stat("item_charged_skill", 1, Some(24), None, "ModStre10a"),
        stat("item_singleskill", 81, Some(27), Some(1), ""),
        stat("item_nonclassskill", 81, Some(28), Some(1), ""),
        stat("item_bag", 0, Some(29), None, ""),
        stat("item_nodesc", 0, None, None, ""),
        stat("item_bad_func", 0, Some(10), Some(1), "ModStr1e"),
        stat("item_bad_mode", 0, Some(1), Some(7), "ModStr1e"),
        stat("item_indesctructible", 160, None, None, ""),
        StatDescriptor {
            desc_str2: "Socketable".to_string(),
            ..stat("item_numsockets", 0, None, None, "")
        },
    ] {
        table.insert(descriptor);
    }
    table
}

fn property(code: &str, funcs: &[(i32, &str, Option<i32>)]) -> PropertyDescriptor {
    PropertyDescriptor {
        index: 0,
        code: code.to_string(),
        funcs: funcs
            .iter()
            .enumerate()
            .map(|(slot, &(func, stat, val))| StatFunction {
                slot,
                set: None,
                val,
                func,
                stat: stat.to_string(),
            })
            .collect(),
        desc: String::new(),
        param: String::new(),
        min: String::new(),
        max: String::new(),
        notes: String::new(),
    }
}

fn properties() -> PropertyTable {
    let mut table = PropertyTable::default();
    for descriptor in [
        property("str", &[(1, "strength", None)]),
        property("res-fire", &[(1, "fireresist", None)]),
        property("res-all", &[(1, "fireresist", None), (3, "lightresist", None)]),
        property("swing2", &[(8, "item_fasterattackrate", None)]),
        property("howl", &[(1, "item_howl", None)]),
        property("hp/lvl", &[(17, "item_hp_perlevel", None)]),
        property("ac/lvl", &[(17, "item_armor_perlevel", None)]),
        property("rep-dur", &[(17, "item_replenish_durability", None)]),
        property("dmg-min", &[(5, "mindamage", None)]),
        property("dmg-max", &[(6, "maxdamage", None)]),
        property("dmg%", &[(7, "item_maxdamage_percent", None)]),
        property("skilltab", &[(10, "item_addskill_tab", None)]),
        property("att-skill", &[(11, "item_skillonattack", None)]),
        property("randclassskill", &[(12, "item_singleskill", None)]),
        property("sock", &[(14, "item_numsockets", None)]),
        property("ac/time", &[(18, "item_armor_bytime", None)]),
        property("charged", &[(19, "item_charged_skill", None)]),
        property("indestruct", &[(20, "item_indesctructible", None)]),
        property("ama", &[(21, "item_addclassskills", Some(0))]),
        property("sor", &[(21, "item_addclassskills", Some(1))]),
        property("aura", &[(22, "item_aura", None)]),
        property("skill", &[(22, "item_singleskill", None)]),
        property("oskill", &[(22, "item_nonclassskill", None)]),
        property("ethereal", &[(23, "item_ethereal", None)]),
        property("reanimate", &[(24, "item_reanimate", None)]),
        property("ease", &[(1, "item_req_percent", None)]),
        property("class-skill", &[(27, "item_singleskill", None)]),
        property("any-skill", &[(28, "item_nonclassskill", None)]),
        property("bag", &[(29, "item_bag", None)]),
        property("nodesc", &[(1, "item_nodesc", None)]),
        property("empty", &[]),
        property("ghost", &[(1, "no_such_stat", None)]),
        property("ghost-dmg", &[(5, "no_such_stat", None)]),
        property("bad-func", &[(9, "strength", None)]),
        property("bad-rand", &[(12, "strength", None)]),
    ] {
        table.insert(descriptor);
    }
    table
}
