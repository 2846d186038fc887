//! Static skill id / name table

/// `(skill id, internal name)` pairs
pub static SKILLS: &[(i64, &str)] = &[
    (1, "NV_BASIC"),
    (2, "SM_SWORD"),
    (3, "SM_TWOHAND"),
    (4, "SM_RECOVERY"),
    (5, "SM_BASH"),
    (6, "SM_PROVOKE"),
    (7, "SM_MAGNUM"),
    (8, "SM_ENDURE"),
    (9, "MG_SRECOVERY"),
    (10, "MG_SIGHT"),
    (11, "MG_NAPALMBEAT"),
    (12, "MG_SAFETYWALL"),
    (13, "MG_SOULSTRIKE"),
    (14, "MG_COLDBOLT"),
    (15, "MG_FROSTDIVER"),
    (16, "MG_STONECURSE"),
    (17, "MG_FIREBALL"),
    (18, "MG_FIREWALL"),
    (19, "MG_FIREBOLT"),
    (20, "MG_LIGHTNINGBOLT"),
    (21, "MG_THUNDERSTORM"),
    (22, "AL_DP"),
    (23, "AL_DEMONBANE"),
    (24, "AL_RUWACH"),
    (25, "AL_PNEUMA"),
    (26, "AL_TELEPORT"),
    (27, "AL_WARP"),
    (28, "AL_HEAL"),
    (29, "AL_INCAGI"),
    (30, "AL_DECAGI"),
    (31, "AL_HOLYWATER"),
    (32, "AL_CRUCIS"),
    (33, "AL_ANGELUS"),
    (34, "AL_BLESSING"),
    (35, "AL_CURE"),
    (42, "MC_MAMMONITE"),
    (46, "AC_DOUBLE"),
    (47, "AC_SHOWER"),
    (48, "TF_DOUBLE"),
    (49, "TF_MISS"),
    (50, "TF_STEAL"),
    (51, "TF_HIDING"),
    (52, "TF_POISON"),
    (53, "TF_DETOXIFY"),
    (56, "KN_PIERCE"),
    (57, "KN_BRANDISHSPEAR"),
    (58, "KN_SPEARSTAB"),
    (59, "KN_SPEARBOOMERANG"),
    (60, "KN_TWOHANDQUICKEN"),
    (61, "KN_AUTOCOUNTER"),
    (62, "KN_BOWLINGBASH"),
    (135, "AS_CLOAKING"),
    (136, "AS_SONICBLOW"),
    (137, "AS_GRIMTOOTH"),
    (140, "AS_VENOMDUST"),
    (141, "AS_SPLASHER"),
    (158, "NPC_PIERCINGATT"),
    (159, "NPC_MENTALBREAKER"),
    (160, "NPC_RANGEATTACK"),
    (161, "NPC_ATTRICHANGE"),
    (162, "NPC_CHANGEWATER"),
    (163, "NPC_CHANGEGROUND"),
    (164, "NPC_CHANGEFIRE"),
    (165, "NPC_CHANGEWIND"),
    (166, "NPC_CHANGEPOISON"),
    (167, "NPC_CHANGEHOLY"),
    (168, "NPC_CHANGEDARKNESS"),
    (169, "NPC_CHANGETELEKINESIS"),
    (170, "NPC_CRITICALSLASH"),
    (171, "NPC_COMBOATTACK"),
    (172, "NPC_GUIDEDATTACK"),
    (173, "NPC_SELFDESTRUCTION"),
    (174, "NPC_SPLASHATTACK"),
    (175, "NPC_SUICIDE"),
    (176, "NPC_POISON"),
    (177, "NPC_BLINDATTACK"),
    (178, "NPC_SILENCEATTACK"),
    (179, "NPC_STUNATTACK"),
    (180, "NPC_PETRIFYATTACK"),
    (181, "NPC_CURSEATTACK"),
    (182, "NPC_SLEEPATTACK"),
    (183, "NPC_RANDOMATTACK"),
    (184, "NPC_WATERATTACK"),
    (185, "NPC_GROUNDATTACK"),
    (186, "NPC_FIREATTACK"),
    (187, "NPC_WINDATTACK"),
    (188, "NPC_POISONATTACK"),
    (189, "NPC_HOLYATTACK"),
    (190, "NPC_DARKNESSATTACK"),
    (191, "NPC_TELEKINESISATTACK"),
    (192, "NPC_MAGICALATTACK"),
    (193, "NPC_METAMORPHOSIS"),
    (194, "NPC_PROVOCATION"),
    (195, "NPC_SMOKING"),
    (196, "NPC_SUMMONSLAVE"),
    (197, "NPC_EMOTION"),
    (198, "NPC_TRANSFORMATION"),
    (199, "NPC_BLOODDRAIN"),
    (200, "NPC_ENERGYDRAIN"),
    (201, "NPC_KEEPING"),
    (202, "NPC_DARKBREATH"),
    (203, "NPC_DARKBLESSING"),
    (204, "NPC_BARRIER"),
    (205, "NPC_DEFENDER"),
    (206, "NPC_LICK"),
    (207, "NPC_HALLUCINATION"),
    (208, "NPC_REBIRTH"),
    (209, "NPC_SUMMONMONSTER"),
];
