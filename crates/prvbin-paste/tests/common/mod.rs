//! Independent PrivateBin v2 reader used to check that built requests decrypt
//! the way other clients decrypt them. It works only from the request JSON,
//! the passphrase, and the password.

#![allow(dead_code)]

use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{Aead, KeyInit, Payload};
use aes_gcm::aes::Aes256;
use aes_gcm::{AesGcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use flate2::read::DeflateDecoder;
use sha2::Sha256;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};

use prvbin_crypto::{CryptoResult, OsRandom, RandomSource};

/// Decrypt a request body, returning the inner blob JSON bytes.
pub fn open_request(body: &[u8], passphrase: &[u8], password: &str) -> Vec<u8> {
    let json: serde_json::Value = serde_json::from_slice(body).expect("request is JSON");
    let adata = &json["adata"];
    let params = adata[0].as_array().expect("cipher params array");

    let nonce = STANDARD.decode(params[0].as_str().unwrap()).unwrap();
    let salt = STANDARD.decode(params[1].as_str().unwrap()).unwrap();
    let iterations = params[2].as_u64().unwrap() as u32;
    assert_eq!(params[3], 256);
    assert_eq!(params[4], 128);
    assert_eq!(params[5], "aes");
    assert_eq!(params[6], "gcm");

    let mut ikm = passphrase.to_vec();
    ikm.extend_from_slice(password.as_bytes());
    let mut key = [0u8; 32];
    pbkdf2::pbkdf2_hmac::<Sha256>(&ikm, &salt, iterations, &mut key);

    // Readers authenticate against their own serialization of the adata
    let aad = serde_json::to_vec(adata).unwrap();
    let ct = STANDARD.decode(json["ct"].as_str().unwrap()).unwrap();

    let cipher = AesGcm::<Aes256, U16>::new_from_slice(&key).unwrap();
    let plain = cipher
        .decrypt(Nonce::<U16>::from_slice(&nonce), Payload { msg: &ct, aad: &aad })
        .expect("GCM authentication must succeed");

    match params[7].as_str().unwrap() {
        "zlib" => {
            let mut out = Vec::new();
            DeflateDecoder::new(plain.as_slice())
                .read_to_end(&mut out)
                .expect("raw deflate stream");
            out
        }
        "none" => plain,
        other => panic!("unknown compression {other}"),
    }
}

/// OS randomness that counts how many draws were made.
#[derive(Default)]
pub struct CountingRandom {
    pub draws: AtomicUsize,
}

impl CountingRandom {
    pub fn draws(&self) -> usize {
        self.draws.load(Ordering::SeqCst)
    }
}

impl RandomSource for CountingRandom {
    fn fill_bytes(&self, dest: &mut [u8]) -> CryptoResult<()> {
        self.draws.fetch_add(1, Ordering::SeqCst);
        OsRandom.fill_bytes(dest)
    }
}
