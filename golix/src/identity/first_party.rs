//! The private-key holder: mints objects, decrypts, derives shared
//! secrets. The only role that can produce a [`SerializedIdentity`] —
//! the sole egress path for private key material.

use golix_schema::objects::{GdxxFields, GeocFields, GobdFields, GobsFields};
use rsa::pkcs8::{DecodePrivateKey, EncodePrivateKey};
use rsa::{RsaPrivateKey, RsaPublicKey};
use tracing::{debug, trace};

use crate::address::Guid;
use crate::error::GolixError;
use crate::identity::second_party::SecondParty;
use crate::identity::{encode_inner, parse_inner, Inner};
use crate::objects::{self, Empty, Garq, Gdxx, Geoc, Gobd, Gobs, Object, Sealed};
use crate::secret::{cipher_lengths, Secret};
use crate::suite::{
    self, EncryptionPrivateKey, EncryptionPublicKey, ExchangePrivateKey, ExchangePublicKey,
    KeyBundlePublic, SigningPrivateKey, SigningPublicKey,
};

/// The DER/raw-scalar export of a `FirstParty`'s private material.
/// Produced only by [`FirstParty::serialize`]; consumed only by
/// [`FirstParty::from_serialized`].
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct SerializedIdentity {
    pub guid: Guid,
    pub cipher: u8,
    pub address_algo: u8,
    pub signature_key_der: Vec<u8>,
    pub encryption_key_der: Vec<u8>,
    pub exchange_key: Vec<u8>,
}

pub struct FirstParty {
    pub guid: Guid,
    pub cipher: u8,
    pub address_algo: u8,
    pub second_party: SecondParty,
    signing_priv: SigningPrivateKey,
    encryption_priv: EncryptionPrivateKey,
    exchange_priv: ExchangePrivateKey,
}

impl FirstParty {
    pub fn generate(cipher: u8, address_algo: u8) -> Result<Self, GolixError> {
        let (public, private) = suite::keygen(cipher)?;
        let second_party = SecondParty::from_keys(&public, address_algo)?;
        debug!(guid = ?second_party.guid, cipher, address_algo, "generated identity");
        Ok(Self {
            guid: second_party.guid.clone(),
            cipher,
            address_algo,
            second_party,
            signing_priv: private.signature,
            encryption_priv: private.encryption,
            exchange_priv: private.exchange,
        })
    }

    pub fn from_serialized(data: &SerializedIdentity) -> Result<Self, GolixError> {
        match data.cipher {
            1 => {
                let sig = RsaPrivateKey::from_pkcs8_der(&data.signature_key_der)
                    .map_err(|_| GolixError::MalformedIdentity)?;
                let enc = RsaPrivateKey::from_pkcs8_der(&data.encryption_key_der)
                    .map_err(|_| GolixError::MalformedIdentity)?;
                let ex_bytes: [u8; 32] = data
                    .exchange_key
                    .as_slice()
                    .try_into()
                    .map_err(|_| GolixError::MalformedIdentity)?;
                let ex = x25519_dalek::StaticSecret::from(ex_bytes);

                let sig_pub = RsaPublicKey::from(&sig);
                let enc_pub = RsaPublicKey::from(&enc);
                let ex_pub = x25519_dalek::PublicKey::from(&ex);

                let public = KeyBundlePublic {
                    cipher: 1,
                    signature: SigningPublicKey::Rsa4096(Box::new(sig_pub)),
                    encryption: EncryptionPublicKey::Rsa4096(Box::new(enc_pub)),
                    exchange: ExchangePublicKey::X25519(Box::new(ex_pub)),
                };
                let second_party = SecondParty::from_keys(&public, data.address_algo)?;
                if second_party.guid != data.guid {
                    return Err(GolixError::MalformedIdentity);
                }

                debug!(guid = ?second_party.guid, "restored identity from serialized material");
                Ok(Self {
                    guid: data.guid.clone(),
                    cipher: 1,
                    address_algo: data.address_algo,
                    second_party,
                    signing_priv: SigningPrivateKey::Rsa4096(Box::new(sig)),
                    encryption_priv: EncryptionPrivateKey::Rsa4096(Box::new(enc)),
                    exchange_priv: ExchangePrivateKey::X25519(Box::new(ex)),
                })
            }
            other => Err(GolixError::UnknownCipher(other)),
        }
    }

    pub fn serialize(&self) -> Result<SerializedIdentity, GolixError> {
        match (&self.signing_priv, &self.encryption_priv, &self.exchange_priv) {
            (
                SigningPrivateKey::Rsa4096(sig),
                EncryptionPrivateKey::Rsa4096(enc),
                ExchangePrivateKey::X25519(ex),
            ) => Ok(SerializedIdentity {
                guid: self.guid.clone(),
                cipher: self.cipher,
                address_algo: self.address_algo,
                signature_key_der: sig
                    .to_pkcs8_der()
                    .map_err(|_| GolixError::MalformedIdentity)?
                    .as_bytes()
                    .to_vec(),
                encryption_key_der: enc
                    .to_pkcs8_der()
                    .map_err(|_| GolixError::MalformedIdentity)?
                    .as_bytes()
                    .to_vec(),
                exchange_key: ex.to_bytes().to_vec(),
            }),
            #[cfg(feature = "test-suite-0")]
            _ => Ok(SerializedIdentity {
                guid: self.guid.clone(),
                cipher: self.cipher,
                address_algo: self.address_algo,
                signature_key_der: Vec::new(),
                encryption_key_der: Vec::new(),
                exchange_key: Vec::new(),
            }),
        }
    }

    /// Generates a fresh symmetric [`Secret`] sized for this identity's
    /// own ciphersuite.
    pub fn new_secret(&self) -> Result<Secret, GolixError> {
        let lengths = cipher_lengths(self.cipher)?;
        let mut key = vec![0u8; lengths.key];
        let mut seed = vec![0u8; lengths.seed];
        getrandom::getrandom(&mut key).map_err(|_| GolixError::InvalidSecretEncoding)?;
        getrandom::getrandom(&mut seed).map_err(|_| GolixError::InvalidSecretEncoding)?;
        Secret::new(self.cipher, key, seed)
    }

    fn mac_key_with(&self, peer: &SecondParty) -> Result<Vec<u8>, GolixError> {
        suite::derive_shared(
            self.cipher,
            &self.exchange_priv,
            &peer.exchange_pub,
            &self.guid.address,
            &peer.guid.address,
        )
    }

    // ---- minting ----

    pub fn make_container(
        &self,
        secret: &Secret,
        plaintext: &[u8],
    ) -> Result<Object<Geoc, Sealed>, GolixError> {
        if secret.cipher() != self.cipher {
            return Err(GolixError::IncompatibleSuite);
        }
        let payload = suite::crypt_sym(secret.cipher(), secret.key(), secret.seed(), plaintext)?;
        let fields = GeocFields {
            cipher: self.cipher,
            address_algo: self.address_algo,
            author: (&self.guid).into(),
            payload,
        };
        let packed = Object::<Geoc, Empty>::new(fields).pack()?;
        trace!(guid = ?packed.guid(), "minted GEOC");
        objects::seal_with_signature(packed, &self.signing_priv)
    }

    pub fn make_bind_static(&self, target: &Guid) -> Result<Object<Gobs, Sealed>, GolixError> {
        let fields = GobsFields {
            cipher: self.cipher,
            address_algo: self.address_algo,
            binder: (&self.guid).into(),
            target: target.into(),
        };
        let packed = Object::<Gobs, Empty>::new(fields).pack()?;
        trace!(guid = ?packed.guid(), "minted GOBS");
        objects::seal_with_signature(packed, &self.signing_priv)
    }

    pub fn make_bind_dynamic(
        &self,
        targets: Vec<Guid>,
        dynamic_address: Option<Guid>,
        history: Vec<Guid>,
    ) -> Result<Object<Gobd, Sealed>, GolixError> {
        let fields = GobdFields {
            cipher: self.cipher,
            address_algo: self.address_algo,
            binder: (&self.guid).into(),
            targets: targets.iter().map(Into::into).collect(),
            dynamic_address: dynamic_address.as_ref().map(Into::into),
            history: history.iter().map(Into::into).collect(),
        };
        let packed = Object::<Gobd, Empty>::new(fields).pack()?;
        trace!(guid = ?packed.guid(), "minted GOBD");
        objects::seal_with_signature(packed, &self.signing_priv)
    }

    pub fn make_debind(&self, target: &Guid) -> Result<Object<Gdxx, Sealed>, GolixError> {
        let fields = GdxxFields {
            cipher: self.cipher,
            address_algo: self.address_algo,
            debinder: (&self.guid).into(),
            target: target.into(),
        };
        let packed = Object::<Gdxx, Empty>::new(fields).pack()?;
        trace!(guid = ?packed.guid(), "minted GDXX");
        objects::seal_with_signature(packed, &self.signing_priv)
    }

    pub fn make_handshake(&self, secret: &Secret, target: &Guid) -> Inner {
        Inner::Handshake {
            target: target.clone(),
            secret: secret.clone(),
        }
    }

    pub fn make_ack(&self, target: &Guid, status: u8) -> Inner {
        Inner::Ack {
            target: target.clone(),
            status,
        }
    }

    pub fn make_nak(&self, target: &Guid, status: u8) -> Inner {
        Inner::Nak {
            target: target.clone(),
            status,
        }
    }

    pub fn make_request(
        &self,
        recipient: &SecondParty,
        inner: Inner,
    ) -> Result<Object<Garq, Sealed>, GolixError> {
        let inner_bytes = encode_inner(&inner, &self.guid)?;
        let payload = suite::encrypt_asym(&recipient.encryption_pub, &inner_bytes)?;
        let fields = golix_schema::objects::GarqFields {
            cipher: self.cipher,
            address_algo: self.address_algo,
            recipient: (&recipient.guid).into(),
            payload,
        };
        let packed = Object::<Garq, Empty>::new(fields).pack()?;
        let mac_key = self.mac_key_with(recipient)?;
        let tag = suite::mac(self.cipher, &mac_key, &packed.guid().address)?;
        trace!(guid = ?packed.guid(), "minted GARQ");
        Ok(packed.seal(tag))
    }

    // ---- receiving ----

    pub fn receive_container(
        &self,
        author: &SecondParty,
        secret: &Secret,
        geoc: &Object<Geoc, Sealed>,
    ) -> Result<Vec<u8>, GolixError> {
        objects::verify_signature(geoc, &author.signing_pub)?;
        if secret.cipher() != self.cipher {
            return Err(GolixError::IncompatibleSuite);
        }
        suite::crypt_sym(
            secret.cipher(),
            secret.key(),
            secret.seed(),
            &geoc.fields().payload,
        )
    }

    pub fn receive_bind_static(
        &self,
        author: &SecondParty,
        gobs: &Object<Gobs, Sealed>,
    ) -> Result<Guid, GolixError> {
        objects::verify_signature(gobs, &author.signing_pub)?;
        Ok((&gobs.fields().target).into())
    }

    pub fn receive_bind_dynamic(
        &self,
        author: &SecondParty,
        gobd: &Object<Gobd, Sealed>,
    ) -> Result<Vec<Guid>, GolixError> {
        objects::verify_signature(gobd, &author.signing_pub)?;
        Ok(gobd.fields().targets.iter().map(Into::into).collect())
    }

    pub fn receive_debind(
        &self,
        author: &SecondParty,
        gdxx: &Object<Gdxx, Sealed>,
    ) -> Result<Guid, GolixError> {
        objects::verify_signature(gdxx, &author.signing_pub)?;
        Ok((&gdxx.fields().target).into())
    }

    /// Parses a GARQ and decrypts its inner payload. The payload's
    /// signature/MAC is deliberately **not** checked here — the claimed
    /// author isn't trusted until [`FirstParty::receive_request`] runs.
    pub fn unpack_request(&self, bytes: &[u8]) -> Result<UnpackedGarq, GolixError> {
        let object = Object::<Garq, Sealed>::from_sealed_bytes(bytes)?;
        let inner_bytes = suite::decrypt_asym(&self.encryption_priv, &object.fields().payload)?;
        let (plaintext, author) = parse_inner(&inner_bytes).ok_or(GolixError::BadRequest)?;
        Ok(UnpackedGarq {
            object,
            plaintext,
            author,
        })
    }

    /// Verifies `garq` was authenticated by `requestor` and returns its
    /// inner payload. `garq` is consumed — the only way to read its
    /// `plaintext`/`author` is through this call, and once it returns
    /// there is no surviving handle to the unverified view.
    ///
    /// A mismatched `requestor` is not special-cased: `derive_shared` is
    /// asymmetric in its inputs, so a wrong peer GUID yields a wrong
    /// `mac_key` and the HMAC comparison below fails on its own,
    /// surfacing as [`GolixError::BadMac`] exactly as spec property 9
    /// requires — not a distinct "wrong requestor" signal an attacker
    /// could use to probe who the real author is.
    pub fn receive_request(
        &self,
        requestor: &SecondParty,
        garq: UnpackedGarq,
    ) -> Result<Inner, GolixError> {
        let mac_key = self.mac_key_with(requestor)?;
        suite::verify_mac(
            self.cipher,
            &mac_key,
            &garq.object.guid().address,
            garq.object.trailer(),
        )?;
        Ok(garq.plaintext)
    }
}

/// A parsed-but-unverified GARQ: `author` and the inner payload are
/// visible for inspection (e.g. routing), but only
/// [`FirstParty::receive_request`] can authenticate and consume them.
pub struct UnpackedGarq {
    object: Object<Garq, Sealed>,
    plaintext: Inner,
    author: Guid,
}

impl UnpackedGarq {
    pub fn author(&self) -> &Guid {
        &self.author
    }

    pub fn guid(&self) -> &Guid {
        self.object.guid()
    }
}
