use anyhow::{anyhow, Result};

use StaticHashDB::hash::{hash64, slot_index, HashKind};

pub fn exec(key: String, buckets: u32) -> Result<()> {
    if buckets == 0 {
        return Err(anyhow!("buckets must be > 0"));
    }
    println!("key '{}' ({} chars), {} slot(s)", key, key.chars().count(), buckets);
    for kind in HashKind::ALL {
        let h = hash64(kind, &key);
        println!(
            "  {} {:<8} {:>20}  0x{:016x}  slot {}",
            kind.to_u32(),
            kind.name(),
            h,
            h,
            slot_index(h, buckets)
        );
    }
    Ok(())
}
