use anyhow::Result;

use StaticHashDB::hash::HashKind;
use StaticHashDB::index::{Bucket, HashIndex};

#[test]
fn zero_sized_index_is_rejected() {
    assert!(HashIndex::new(0, 3).is_err());
    assert!(HashIndex::new(11, 0).is_err());
}

#[test]
fn fresh_index_has_one_empty_bucket_per_slot() -> Result<()> {
    let idx = HashIndex::new(5, 2)?;
    assert_eq!(idx.num_buckets(), 5);
    assert_eq!(idx.bucket_capacity(), 2);
    for (slot, chain) in idx.chains() {
        assert_eq!(chain.len(), 1, "slot {slot}");
        assert!(chain[0].is_empty());
        assert_eq!(chain[0].capacity(), 2);
    }
    assert!(idx.chain(5).is_none());
    assert_eq!(idx.chain_len(99), 0);
    assert_eq!(idx.key_count(), 0);
    Ok(())
}

#[test]
fn lookup_is_last_write_wins() -> Result<()> {
    let mut idx = HashIndex::new(11, 3)?;
    idx.insert("ana", 0);
    idx.insert("bia", 0);
    idx.insert("ana", 4);
    idx.insert("ana", 2);

    assert_eq!(idx.lookup("ana"), Some(2));
    assert_eq!(idx.lookup("bia"), Some(0));
    assert_eq!(idx.lookup("never"), None);
    assert_eq!(idx.key_count(), 2);
    assert_eq!(idx.insert_count(), 4);

    // цепочка помнит все адреса "ana" в порядке вставки
    let slot = idx.slot_of("ana");
    let addrs: Vec<u64> = idx
        .chain(slot)
        .unwrap_or(&[])
        .iter()
        .flat_map(|b| b.addresses().to_vec())
        .collect();
    assert_eq!(addrs, vec![0, 4, 2]);
    Ok(())
}

#[test]
fn single_slot_chain_grows_bucket_by_bucket() -> Result<()> {
    let mut idx = HashIndex::new(1, 3)?;
    for i in 0..10u64 {
        idx.insert(&format!("key-{i}"), i);
    }
    let chain = idx.chain(0).unwrap_or(&[]);
    assert_eq!(chain.len(), 4);
    assert_eq!(chain[0].addresses(), &[0, 1, 2]);
    assert_eq!(chain[1].addresses(), &[3, 4, 5]);
    assert_eq!(chain[2].addresses(), &[6, 7, 8]);
    assert_eq!(chain[3].addresses(), &[9]);
    assert!(chain[..3].iter().all(Bucket::is_full));
    Ok(())
}

#[test]
fn colliding_keys_beyond_raw_capacity_never_fail() -> Result<()> {
    let num_buckets = 11u32;
    let cap = 3usize;
    let mut idx = HashIndex::new(num_buckets, cap)?;
    let target = idx.slot_of("ana");

    // больше, чем num_buckets * cap ключей в один и тот же слот
    let keys: Vec<String> = (0..10_000)
        .map(|i| format!("k{i}"))
        .filter(|k| idx.slot_of(k) == target)
        .take(40)
        .collect();
    assert_eq!(keys.len(), 40);
    assert!(keys.len() > num_buckets as usize * cap);

    for (i, k) in keys.iter().enumerate() {
        idx.insert(k, i as u64);
    }

    let expected_min = keys.len().div_ceil(cap);
    assert!(idx.chain_len(target) >= expected_min);
    assert_eq!(idx.chain_len(target), expected_min);
    for (i, k) in keys.iter().enumerate() {
        assert_eq!(idx.lookup(k), Some(i as u64));
    }
    // остальные слоты не тронуты
    for (slot, chain) in idx.chains() {
        if slot != target {
            assert_eq!(chain.len(), 1);
            assert!(chain[0].is_empty());
        }
    }
    Ok(())
}

#[test]
fn every_insert_lands_in_its_slot_chain() -> Result<()> {
    for kind in HashKind::ALL {
        let mut idx = HashIndex::with_hash_kind(7, 2, kind)?;
        for i in 0..200u64 {
            let key = format!("word{i}");
            idx.insert(&key, i);
            let slot = idx.slot_of(&key);
            let present = idx
                .chain(slot)
                .unwrap_or(&[])
                .iter()
                .any(|b| b.contains(i));
            assert!(present, "{kind}: address {i} missing from slot {slot}");
        }
        let total: usize = idx
            .chains()
            .flat_map(|(_, c)| c.iter())
            .map(Bucket::len)
            .sum();
        assert_eq!(total, 200);
        for (_, chain) in idx.chains() {
            for b in chain {
                assert!(b.len() <= b.capacity());
            }
            // полные bucket'ы идут строго до последнего
            let last = chain.len() - 1;
            assert!(chain[..last].iter().all(Bucket::is_full));
        }
    }
    Ok(())
}

#[test]
fn largest_page_address_is_stored_and_found() -> Result<()> {
    let mut idx = HashIndex::new(3, 2)?;
    idx.insert("k", u64::MAX);
    idx.insert("j", 0);

    assert_eq!(idx.lookup("k"), Some(u64::MAX));
    assert_eq!(idx.lookup("j"), Some(0));
    assert_eq!(idx.candidates("k"), {
        let mut v = vec![u64::MAX];
        if idx.slot_of("j") == idx.slot_of("k") {
            v.push(0);
        }
        v
    });
    let dump = idx.dump();
    assert_eq!(dump.occupied_addresses(), 2);
    Ok(())
}
