// AES-GCM Test Vectors for Interoperability
// Test cases from the GCM submission (McGrew and Viega), as used in NIST SP 800-38D validation

/// Test vector structure for AES-GCM operations, all fields hex encoded
#[derive(Debug, Clone, Copy)]
pub struct AesGcmTestVector {
    pub name: &'static str,
    pub key: &'static str,
    pub iv: &'static str,
    pub plaintext: &'static str,
    pub aad: &'static str,
    pub ciphertext: &'static str,
    pub tag: &'static str,
}

/// Decoded form of [`AesGcmTestVector`]
pub struct DecodedVector {
    pub key: Vec<u8>,
    pub iv: Vec<u8>,
    pub plaintext: Vec<u8>,
    pub aad: Vec<u8>,
    pub ciphertext: Vec<u8>,
    pub tag: Vec<u8>,
}

impl AesGcmTestVector {
    pub fn decode(&self) -> DecodedVector {
        let field = |value: &str, what: &str| {
            hex::decode(value).unwrap_or_else(|e| panic!("{}: bad {} hex: {}", self.name, what, e))
        };
        DecodedVector {
            key: field(self.key, "key"),
            iv: field(self.iv, "iv"),
            plaintext: field(self.plaintext, "plaintext"),
            aad: field(self.aad, "aad"),
            ciphertext: field(self.ciphertext, "ciphertext"),
            tag: field(self.tag, "tag"),
        }
    }
}

const K_ZERO_128: &str = "00000000000000000000000000000000";
const K_ZERO_192: &str = "000000000000000000000000000000000000000000000000";
const K_ZERO_256: &str = "0000000000000000000000000000000000000000000000000000000000000000";
const K_128: &str = "feffe9928665731c6d6a8f9467308308";
const K_192: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c";
const K_256: &str = "feffe9928665731c6d6a8f9467308308feffe9928665731c6d6a8f9467308308";

const IV_ZERO: &str = "000000000000000000000000";
const IV_96: &str = "cafebabefacedbaddecaf888";
const IV_64: &str = "cafebabefacedbad";
const IV_480: &str = "9313225df88406e555909c5aff5269aa\
                      6a7a9538534f7da1e4c303d2a318a728\
                      c3c0c95156809539fcf0e2429a6b5254\
                      16aedbf5a0de6a57a637b39b";

const P_ZERO_BLOCK: &str = "00000000000000000000000000000000";
const P_64: &str = "d9313225f88406e5a55909c5aff5269a\
                    86a7a9531534f7da2e4c303d8a318a72\
                    1c3c0c95956809532fcf0e2449a6b525\
                    b16aedf5aa0de657ba637b391aafd255";
const P_60: &str = "d9313225f88406e5a55909c5aff5269a\
                    86a7a9531534f7da2e4c303d8a318a72\
                    1c3c0c95956809532fcf0e2449a6b525\
                    b16aedf5aa0de657ba637b39";
const AAD_20: &str = "feedfacedeadbeeffeedfacedeadbeefabaddad2";

/// Standard test vectors covering all key sizes, AAD and non-96-bit IVs
pub fn standard_test_vectors() -> Vec<AesGcmTestVector> {
    vec![
        AesGcmTestVector {
            name: "AES-128 test case 1 (empty)",
            key: K_ZERO_128,
            iv: IV_ZERO,
            plaintext: "",
            aad: "",
            ciphertext: "",
            tag: "58e2fccefa7e3061367f1d57a4e7455a",
        },
        AesGcmTestVector {
            name: "AES-128 test case 2 (one block)",
            key: K_ZERO_128,
            iv: IV_ZERO,
            plaintext: P_ZERO_BLOCK,
            aad: "",
            ciphertext: "0388dace60b6a392f328c2b971b2fe78",
            tag: "ab6e47d42cec13bdf53a67b21257bddf",
        },
        AesGcmTestVector {
            name: "AES-128 test case 3 (four blocks)",
            key: K_128,
            iv: IV_96,
            plaintext: P_64,
            aad: "",
            ciphertext: "42831ec2217774244b7221b784d0d49c\
                         e3aa212f2c02a4e035c17e2329aca12e\
                         21d514b25466931c7d8f6a5aac84aa05\
                         1ba30b396a0aac973d58e091473f5985",
            tag: "4d5c2af327cd64a62cf35abd2ba6fab4",
        },
        AesGcmTestVector {
            name: "AES-128 test case 4 (partial block, AAD)",
            key: K_128,
            iv: IV_96,
            plaintext: P_60,
            aad: AAD_20,
            ciphertext: "42831ec2217774244b7221b784d0d49c\
                         e3aa212f2c02a4e035c17e2329aca12e\
                         21d514b25466931c7d8f6a5aac84aa05\
                         1ba30b396a0aac973d58e091",
            tag: "5bc94fbc3221a5db94fae95ae7121a47",
        },
        AesGcmTestVector {
            name: "AES-128 test case 5 (64-bit IV)",
            key: K_128,
            iv: IV_64,
            plaintext: P_60,
            aad: AAD_20,
            ciphertext: "61353b4c2806934a777ff51fa22a4755\
                         699b2a714fcdc6f83766e5f97b6c7423\
                         73806900e49f24b22b097544d4896b42\
                         4989b5e1ebac0f07c23f4598",
            tag: "3612d2e79e3b0785561be14aaca2fccb",
        },
        AesGcmTestVector {
            name: "AES-128 test case 6 (480-bit IV)",
            key: K_128,
            iv: IV_480,
            plaintext: P_60,
            aad: AAD_20,
            ciphertext: "8ce24998625615b603a033aca13fb894\
                         be9112a5c3a211a8ba262a3cca7e2ca7\
                         01e4a9a4fba43c90ccdcb281d48c7c6f\
                         d62875d2aca417034c34aee5",
            tag: "619cc5aefffe0bfa462af43c1699d050",
        },
        AesGcmTestVector {
            name: "AES-192 test case 7 (empty)",
            key: K_ZERO_192,
            iv: IV_ZERO,
            plaintext: "",
            aad: "",
            ciphertext: "",
            tag: "cd33b28ac773f74ba00ed1f312572435",
        },
        AesGcmTestVector {
            name: "AES-192 test case 8 (one block)",
            key: K_ZERO_192,
            iv: IV_ZERO,
            plaintext: P_ZERO_BLOCK,
            aad: "",
            ciphertext: "98e7247c07f0fe411c267e4384b0f600",
            tag: "2ff58d80033927ab8ef4d4587514f0fb",
        },
        AesGcmTestVector {
            name: "AES-192 test case 9 (four blocks)",
            key: K_192,
            iv: IV_96,
            plaintext: P_64,
            aad: "",
            ciphertext: "3980ca0b3c00e841eb06fac4872a2757\
                         859e1ceaa6efd984628593b40ca1e19c\
                         7d773d00c144c525ac619d18c84a3f47\
                         18e2448b2fe324d9ccda2710acade256",
            tag: "9924a7c8587336bfb118024db8674a14",
        },
        AesGcmTestVector {
            name: "AES-256 test case 13 (empty)",
            key: K_ZERO_256,
            iv: IV_ZERO,
            plaintext: "",
            aad: "",
            ciphertext: "",
            tag: "530f8afbc74536b9a963b4f1c4cb738b",
        },
        AesGcmTestVector {
            name: "AES-256 test case 14 (one block)",
            key: K_ZERO_256,
            iv: IV_ZERO,
            plaintext: P_ZERO_BLOCK,
            aad: "",
            ciphertext: "cea7403d4d606b6e074ec5d3baf39d18",
            tag: "d0d1c8a799996bf0265b98b5d48ab919",
        },
        AesGcmTestVector {
            name: "AES-256 test case 15 (four blocks)",
            key: K_256,
            iv: IV_96,
            plaintext: P_64,
            aad: "",
            ciphertext: "522dc1f099567d07f47f37a32a84427d\
                         643a8cdcbfe5c0c97598a2bd2555d1aa\
                         8cb08e48590dbb3da7b08b1056828838\
                         c5f61e6393ba7a0abcc9f662898015ad",
            tag: "b094dac5d93471bdec1a502270e3cc6c",
        },
        AesGcmTestVector {
            name: "AES-256 test case 16 (partial block, AAD)",
            key: K_256,
            iv: IV_96,
            plaintext: P_60,
            aad: AAD_20,
            ciphertext: "522dc1f099567d07f47f37a32a84427d\
                         643a8cdcbfe5c0c97598a2bd2555d1aa\
                         8cb08e48590dbb3da7b08b1056828838\
                         c5f61e6393ba7a0abcc9f662",
            tag: "76fc6ece0f4e1768cddf8853bb2d551b",
        },
    ]
}
