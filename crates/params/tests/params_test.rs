// Test importing and accessing the parameter-set constants

use kemlink_params::{ALL, MLKEM1024, MLKEM512, MLKEM768};

#[test]
fn test_mlkem512_constants() {
    assert_eq!(MLKEM512.k, 2);
    assert_eq!(MLKEM512.public_key_size, 800);
    assert_eq!(MLKEM512.secret_key_size, 1632);
    assert_eq!(MLKEM512.ciphertext_size, 768);
    assert_eq!(MLKEM512.shared_secret_size, 32);
}

#[test]
fn test_mlkem768_constants() {
    assert_eq!(MLKEM768.k, 3);
    assert_eq!(MLKEM768.public_key_size, 1184);
    assert_eq!(MLKEM768.secret_key_size, 2400);
    assert_eq!(MLKEM768.ciphertext_size, 1088);
    assert_eq!(MLKEM768.shared_secret_size, 32);
}

#[test]
fn test_mlkem1024_constants() {
    assert_eq!(MLKEM1024.k, 4);
    assert_eq!(MLKEM1024.public_key_size, 1568);
    assert_eq!(MLKEM1024.secret_key_size, 3168);
    assert_eq!(MLKEM1024.ciphertext_size, 1568);
    assert_eq!(MLKEM1024.shared_secret_size, 32);
}

#[test]
fn test_seed_sizes_uniform() {
    for params in ALL {
        assert_eq!(params.keypair_seed_size, 64);
        assert_eq!(params.encaps_seed_size, 32);
    }
}

// Mixing buffers across levels is a contract violation; the sizes must not
// silently coincide, or a mix-up could go unnoticed.
#[test]
fn test_sizes_distinct_across_levels() {
    for (i, a) in ALL.iter().enumerate() {
        for b in &ALL[i + 1..] {
            assert_ne!(a.public_key_size, b.public_key_size);
            assert_ne!(a.secret_key_size, b.secret_key_size);
            assert_ne!(a.ciphertext_size, b.ciphertext_size);
        }
    }
}

#[test]
fn test_shared_secret_size_constant() {
    for params in ALL {
        assert_eq!(params.shared_secret_size, 32);
    }
}
