use rand::{prelude::*, rngs::StdRng, rngs::SysRng};

pub fn make_seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[cfg(debug_assertions)]
pub fn make_rng() -> StdRng {
    const SEED: u64 = 63;
    make_seeded_rng(SEED)
}

#[cfg(not(debug_assertions))]
pub fn make_rng() -> StdRng {
    use rand::TryRng;
    let seed = SysRng::try_next_u64(&mut SysRng).unwrap();

    make_seeded_rng(seed)
}
