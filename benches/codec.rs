use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nbtree::io::{self, Compression, ReadOpts};
use nbtree::{factory, snbt, Compound, List};

/// Something shaped like a chunk: a few sections of packed longs, some block
/// entities and a heightmap.
fn chunk() -> Compound {
    let mut sections = List::new();
    for y in -4..20 {
        let mut section = Compound::new();
        section.put_byte("Y", y);
        section.put_long_array("BlockStates", vec![0x0123_4567_89ab_cdef; 256]);
        section.put_byte_array("SkyLight", vec![-1; 2048]);
        section.put_string_list("Palette", ["minecraft:stone", "minecraft:dirt", "minecraft:air"]);
        sections.add_compound(section).unwrap();
    }

    let mut entities = List::new();
    for i in 0..32 {
        let mut e = Compound::new();
        e.put_string("id", "minecraft:chest");
        e.put_int("x", i);
        e.put_int("y", 64);
        e.put_int("z", -i);
        e.put("Items", factory::list());
        entities.add_compound(e).unwrap();
    }

    let mut root = Compound::new();
    root.put_int("DataVersion", 3120);
    root.put_string("Status", "full");
    root.put("sections", sections);
    root.put("block_entities", entities);
    root.put_long_array("Heightmap", vec![0; 37]);
    root
}

pub fn codec_benchmark(c: &mut Criterion) {
    let tree = chunk();
    let raw = io::to_bytes(&tree).unwrap();
    let mut gzipped = Vec::new();
    io::write_compressed(&mut gzipped, "", &tree, Compression::Gzip).unwrap();
    let text = snbt::to_string(&tree.clone().into());

    c.bench_function("encode", |b| {
        b.iter(|| black_box(io::to_bytes(black_box(&tree)).unwrap()));
    });

    c.bench_function("decode", |b| {
        b.iter(|| black_box(io::from_bytes(black_box(&raw)).unwrap()));
    });

    c.bench_function("decode gzip", |b| {
        b.iter(|| {
            let read = io::read_detect(black_box(gzipped.as_slice()), ReadOpts::new()).unwrap();
            black_box(read);
        });
    });

    c.bench_function("snbt parse", |b| {
        b.iter(|| black_box(snbt::from_str(black_box(&text)).unwrap()));
    });
}

criterion_group!(benches, codec_benchmark);
criterion_main!(benches);
