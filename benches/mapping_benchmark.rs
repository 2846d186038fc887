//! Benchmark for record mapping throughput

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rathena_schema_core::config::{ConvertOptions, Schema};
use rathena_schema_core::source::{convert_schema_batch, MemorySource};
use rathena_schema_core::template::{map_schema, Template};
use rathena_schema_core::{map_mob, map_mob_skill, RawRecord};
use serde_json::{json, Value};

fn load_poring() -> Value {
    serde_json::from_str(include_str!("../tests/fixtures/mob_1002.json")).unwrap()
}

/// A monster with a long skill list
fn create_large_mob(skills: usize) -> Value {
    let list: Vec<Value> = (0..skills)
        .map(|i| {
            json!({
                "skillId": ([184, 186, 197, 196, 28][i % 5]),
                "status": (["IDLE_ST", "RMOVE_ST", "BERSERK_ST"][i % 3]),
                "level": 1 + (i % 10),
                "chance": 100 + i,
                "casttime": 0,
                "delay": 5000,
                "interruptable": i % 2 == 0,
                "condition": if i % 4 == 0 { json!("IF_HP") } else { Value::Null },
                "conditionValue": if i % 4 == 0 { json!(50) } else { Value::Null },
                "sendType": if i % 3 == 0 { json!("SEND_EMOTICON") } else { Value::Null },
                "sendValue": if i % 3 == 0 { json!(27) } else { Value::Null }
            })
        })
        .collect();
    json!({
        "id": 1039,
        "name": "Baphomet",
        "slaves": [{"id": 1101}, {"id": 1101}, {"id": 1101}],
        "skill": list
    })
}

fn benchmark_mob_skill(c: &mut Criterion) {
    let poring = load_poring();
    c.bench_function("map_mob_skill_poring", |b| {
        b.iter(|| black_box(map_mob_skill(black_box(&poring)).unwrap()))
    });

    let large = create_large_mob(100);
    c.bench_function("map_mob_skill_100_skills", |b| {
        b.iter(|| black_box(map_mob_skill(black_box(&large)).unwrap()))
    });

    c.bench_function("map_mob_poring", |b| {
        b.iter(|| black_box(map_mob(black_box(&poring)).unwrap()))
    });
}

fn benchmark_template(c: &mut Criterion) {
    let template = Template::from_json(&json!({
        "a": "x",
        "b": "y",
        "c": {"d": "z", "e": null},
        "f": 1
    }))
    .unwrap();
    let raw = json!({"x": "y", "y": 2, "z": [1, 2, 3]});

    c.bench_function("map_schema_small_template", |b| {
        b.iter(|| {
            black_box(
                map_schema(Some(&template), RawRecord::from_value(black_box(&raw)), None).unwrap(),
            )
        })
    });
}

fn benchmark_batch(c: &mut Criterion) {
    let source: MemorySource = (0..50u32)
        .map(|i| (1000 + i, create_large_mob(10)))
        .collect();
    let ids: Vec<u32> = (0..50u32).rev().map(|i| 1000 + i).collect();
    let options = ConvertOptions { sort: true };

    c.bench_function("convert_batch_50_mobs", |b| {
        b.iter(|| {
            black_box(
                convert_schema_batch(Schema::MobSkill, black_box(&ids), &source, &options)
                    .unwrap(),
            )
        })
    });
}

criterion_group!(benches, benchmark_mob_skill, benchmark_template, benchmark_batch);
criterion_main!(benches);
