//! Keys generated with OpenSSL in every encoding variant.

/// P-521 key, named curve, uncompressed point
pub const P521_NAMED: &str = "-----BEGIN PUBLIC KEY-----
MIGbMBAGByqGSM49AgEGBSuBBAAjA4GGAAQAvcUTGuz9k5ms+GMlwdZLmyhIn93S
NGPbvncL5P1jmdQRZ3v4jP48hexjvPxKC1JDaToXA+Mb0xuGoYTRpbNxgN0ACDKP
h0ESRzgPc8K6rW+XEdAcllOAemsVisxxDxyETNZpVDMkhuvys/wgFC7448NlOlu7
NDG3koJuRx6u9lPksnY=
-----END PUBLIC KEY-----
";

pub const P521_NAMED_COMPRESSED: &str = "-----BEGIN PUBLIC KEY-----
MFgwEAYHKoZIzj0CAQYFK4EEACMDRAACAL3FExrs/ZOZrPhjJcHWS5soSJ/d0jRj
2753C+T9Y5nUEWd7+Iz+PIXsY7z8SgtSQ2k6FwPjG9MbhqGE0aWzcYDd
-----END PUBLIC KEY-----
";

/// Same key with explicit parameters (including the curve seed).
pub const P521_EXPLICIT: &str = "-----BEGIN PUBLIC KEY-----
MIICXTCCAdAGByqGSM49AgEwggHDAgEBME0GByqGSM49AQECQgH/////////////
////////////////////////////////////////////////////////////////
/////////zCBnwRCAf//////////////////////////////////////////////
///////////////////////////////////////8BEIAUZU+uWGOHJofkpohoLaF
QO6i2nJbmbMV87i0iZGO8QnhVhk5Uex+k3sWUsC9O7G/BzVz34g9LDTx70Uf1GtQ
PwADFQDQnogAKRy4U5bMZxc5MoSqoNpkugSBhQQAxoWOBrcEBOnNnj7LZiOVtEKc
ZIE5BT+1Ifgor2BrTT26oUted+/nWSj+HcEnov+o3jNIs8GFakKb+X5+McLlvWYB
GDkpaniaO8AEXIpftCx9G9mY9URJV5tEaBevvRcnPmYsl+5ymV70JkDFULkBP60H
YTU8cIaicsJAiL6Udp/RZlACQgH/////////////////////////////////////
//////pRhoeDvy+Wa3/MAUj3CaXQO7XJuImcR667b7cekThkCQIBAQOBhgAEAL3F
Exrs/ZOZrPhjJcHWS5soSJ/d0jRj2753C+T9Y5nUEWd7+Iz+PIXsY7z8SgtSQ2k6
FwPjG9MbhqGE0aWzcYDdAAgyj4dBEkc4D3PCuq1vlxHQHJZTgHprFYrMcQ8chEzW
aVQzJIbr8rP8IBQu+OPDZTpbuzQxt5KCbkcervZT5LJ2
-----END PUBLIC KEY-----
";

/// Explicit parameters with a compressed base point and public point.
pub const P521_EXPLICIT_COMPRESSED: &str = "-----BEGIN PUBLIC KEY-----
MIIB1zCCAY0GByqGSM49AgEwggGAAgEBME0GByqGSM49AQECQgH/////////////
////////////////////////////////////////////////////////////////
/////////zCBnwRCAf//////////////////////////////////////////////
///////////////////////////////////////8BEIAUZU+uWGOHJofkpohoLaF
QO6i2nJbmbMV87i0iZGO8QnhVhk5Uex+k3sWUsC9O7G/BzVz34g9LDTx70Uf1GtQ
PwADFQDQnogAKRy4U5bMZxc5MoSqoNpkugRDAgDGhY4GtwQE6c2ePstmI5W0Qpxk
gTkFP7Uh+CivYGtNPbqhS1537+dZKP4dwSei/6jeM0izwYVqQpv5fn4xwuW9ZgJC
Af//////////////////////////////////////////+lGGh4O/L5Zrf8wBSPcJ
pdA7tcm4iZxHrrtvtx6ROGQJAgEBA0QAAgC9xRMa7P2Tmaz4YyXB1kubKEif3dI0
Y9u+dwvk/WOZ1BFne/iM/jyF7GO8/EoLUkNpOhcD4xvTG4ahhNGls3GA3Q==
-----END PUBLIC KEY-----
";

/// Self-signed certificate carrying the P-521 key.
pub const P521_CERTIFICATE: &str = "-----BEGIN CERTIFICATE-----
MIICATCCAWKgAwIBAgIUMRMfDxv8xp8853H2IWPwx1MvsK0wCgYIKoZIzj0EAwIw
ETEPMA0GA1UEAwwGY2xpZW50MCAXDTI2MTAxOTA4NDUxMFoYDzIxMjYwOTI1MDg0
NTEwWjARMQ8wDQYDVQQDDAZjbGllbnQwgZswEAYHKoZIzj0CAQYFK4EEACMDgYYA
BAC9xRMa7P2Tmaz4YyXB1kubKEif3dI0Y9u+dwvk/WOZ1BFne/iM/jyF7GO8/EoL
UkNpOhcD4xvTG4ahhNGls3GA3QAIMo+HQRJHOA9zwrqtb5cR0ByWU4B6axWKzHEP
HIRM1mlUMySG6/Kz/CAULvjjw2U6W7s0MbeSgm5HHq72U+SydqNTMFEwHQYDVR0O
BBYEFIDhgdqhwo1wf1qkfDDMW/XHo5o2MB8GA1UdIwQYMBaAFIDhgdqhwo1wf1qk
fDDMW/XHo5o2MA8GA1UdEwEB/wQFMAMBAf8wCgYIKoZIzj0EAwIDgYwAMIGIAkIA
yyS8Zujgcef2p1OWltur38KYQvTyJ2r+Wixiod6uT3dIg0vKPdYnFSv3o6ScuaZJ
JBydRJMRA3U9K0lLSagb+RsCQgEy5jscnMtGA/68QzkEEgfHMQVfOKY3dUqnbqH5
ld1NHc2kK6QEPdrYrd8raRgTmGCcXDgKaad3C2FnR0SGV0cw+w==
-----END CERTIFICATE-----
";

pub const P256_NAMED: &str = "-----BEGIN PUBLIC KEY-----
MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEUupo+aKoCDymmZDwqV6OvBRwHq8V
y8n9ZxwpSyNx/kEbxDAWmSFeOe5lXU/yx0udniF2kvNCQCiAg1CwF+ffxw==
-----END PUBLIC KEY-----
";

pub const P256_NAMED_COMPRESSED: &str = "-----BEGIN PUBLIC KEY-----
MDkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDIgADUupo+aKoCDymmZDwqV6OvBRwHq8V
y8n9ZxwpSyNx/kE=
-----END PUBLIC KEY-----
";

pub const P256_EXPLICIT: &str = "-----BEGIN PUBLIC KEY-----
MIIBSzCCAQMGByqGSM49AgEwgfcCAQEwLAYHKoZIzj0BAQIhAP////8AAAABAAAA
AAAAAAAAAAAA////////////////MFsEIP////8AAAABAAAAAAAAAAAAAAAA////
///////////8BCBaxjXYqjqT57PrvVV2mIa8ZR0GsMxTsPY7zjw+J9JgSwMVAMSd
NgiG5wSTamZ44ROdJreBn36QBEEEaxfR8uEsQkf4vOblY6RA8ncDfYEt6zOg9KE5
RdiYwpZP40Li/hp/m47n60p8D54WK84zV2sxXs7LtkBoN79R9QIhAP////8AAAAA
//////////+85vqtpxeehPO5ysL8YyVRAgEBA0IABFLqaPmiqAg8ppmQ8KlejrwU
cB6vFcvJ/WccKUsjcf5BG8QwFpkhXjnuZV1P8sdLnZ4hdpLzQkAogINQsBfn38c=
-----END PUBLIC KEY-----
";

pub const P256_EXPLICIT_COMPRESSED: &str = "-----BEGIN PUBLIC KEY-----
MIIBCjCB4wYHKoZIzj0CATCB1wIBATAsBgcqhkjOPQEBAiEA/////wAAAAEAAAAA
AAAAAAAAAAD///////////////8wWwQg/////wAAAAEAAAAAAAAAAAAAAAD/////
//////////wEIFrGNdiqOpPns+u9VXaYhrxlHQawzFOw9jvOPD4n0mBLAxUAxJ02
CIbnBJNqZnjhE50mt4GffpAEIQNrF9Hy4SxCR/i85uVjpEDydwN9gS3rM6D0oTlF
2JjClgIhAP////8AAAAA//////////+85vqtpxeehPO5ysL8YyVRAgEBAyIAA1Lq
aPmiqAg8ppmQ8KlejrwUcB6vFcvJ/WccKUsjcf5B
-----END PUBLIC KEY-----
";

/// A second, unrelated P-256 key.
pub const P256_OTHER: &str = "-----BEGIN PUBLIC KEY-----
MFkwEwYHKoZIzj0CAQYIKoZIzj0DAQcDQgAEHTMfslO9hZtnALaVzXnSKpCjIBFf
tMbZBl57JIaJrqrPdHP2ic7GpTHzpAiAZa5pLknH6PSIpbP2B30rt2PJMw==
-----END PUBLIC KEY-----
";

/// P-256 field and coefficients, but 2G as the generator. Public point is the P256_NAMED point.
pub const P256_OTHER_GENERATOR: &str = "-----BEGIN PUBLIC KEY-----
MIIBMzCB7AYHKoZIzj0CATCB4AIBATAsBgcqhkjOPQEBAiEA/////wAAAAEAAAAA
AAAAAAAAAAD///////////////8wRAQg/////wAAAAEAAAAAAAAAAAAAAAD/////
//////////wEIFrGNdiqOpPns+u9VXaYhrxlHQawzFOw9jvOPD4n0mBLBEEEfPJ7
GI0DT36KUjgDBLUaw8CJaeJ38hs1pgtI/EdmmXgHd1UQ247QQCk9msafdDDbun2t
5jzpgimeBLedInhz0QIhAP////8AAAAA//////////+85vqtpxeehPO5ysL8YyVR
AgEBA0IABFLqaPmiqAg8ppmQ8KlejrwUcB6vFcvJ/WccKUsjcf5BG8QwFpkhXjnu
ZV1P8sdLnZ4hdpLzQkAogINQsBfn38c=
-----END PUBLIC KEY-----
";

pub const P224_EXPLICIT: &str = "-----BEGIN PUBLIC KEY-----
MIIBKjCB6wYHKoZIzj0CATCB3wIBATAoBgcqhkjOPQEBAh0A////////////////
/////wAAAAAAAAAAAAAAATBTBBz////////////////////+///////////////+
BBy0BQqFDASzq/VBMlZQRLC317/YuicLOUMjVf+0AxUAvXE0R5nVx/zcRbWfo7mr
j2qUi8UEOQS3Dgy9a7S/fzITkLlKA8HTVsIRIjQygNYRXB0hvTdjiLX3I/tMIt/m
zUN1oFoHR2RE1YGZhQB+NAIdAP//////////////////FqLguPA+E90pRVxcKj0C
AQEDOgAEcQ1kqNCb1I23Mq0TzAHMCt7k9RnFIxIHeoEIF/C3f92yZ0G9Y9JVR8gY
VNAx4TN2CSmQeRENjiQ=
-----END PUBLIC KEY-----
";

pub const P224_NAMED: &str = "-----BEGIN PUBLIC KEY-----
ME4wEAYHKoZIzj0CAQYFK4EEACEDOgAEcQ1kqNCb1I23Mq0TzAHMCt7k9RnFIxIH
eoEIF/C3f92yZ0G9Y9JVR8gYVNAx4TN2CSmQeRENjiQ=
-----END PUBLIC KEY-----
";

pub const SECP256K1_NAMED: &str = "-----BEGIN PUBLIC KEY-----
MFYwEAYHKoZIzj0CAQYFK4EEAAoDQgAE9FAQ4DSf/d19Y3fGDFzhUr9oZ6qfOyx4
h5/iU5EZ29qUhydPvAcphFQ0dC7xx89rUiEkooZAArsRJSRBt8KbQA==
-----END PUBLIC KEY-----
";

pub const BRAINPOOL_P256_EXPLICIT: &str = "-----BEGIN PUBLIC KEY-----
MIIBMzCB7AYHKoZIzj0CATCB4AIBATAsBgcqhkjOPQEBAiEAqftX26Huqbw+ZgqQ
nYONcm479iPVJiAoIBNIHR9uU3cwRAQgfVoJdfwsMFfu9nUwQXr/5/uAVcEm3Fxs
6UpLRPMwtdkEICbcXGzpSktE8zC12bvXfL+VhBYpXPfhzmvM3Bj/jAe2BEEEi9Ku
uct+V8ssS0gv/IG3r7neJ+HjvSPCOkRTvZrOMmJUfvg1w9rE/Zf4RhoUYR3JwndF
Ey3tjlRcHVTHLwRplwIhAKn7V9uh7qm8PmYKkJ2DjXGMOXqjtWGm95AeDoKXSFan
AgEBA0IABImc++HVDEPG0wTavzcEG7lBPtdpuRdyi9mpR37Y3FCdWBQYkAYvsxQe
d32V0Vv2n8yXuN2l6UnC9EvuTjAFANQ=
-----END PUBLIC KEY-----
";

pub const BRAINPOOL_P256_NAMED: &str = "-----BEGIN PUBLIC KEY-----
MFowFAYHKoZIzj0CAQYJKyQDAwIIAQEHA0IABImc++HVDEPG0wTavzcEG7lBPtdp
uRdyi9mpR37Y3FCdWBQYkAYvsxQed32V0Vv2n8yXuN2l6UnC9EvuTjAFANQ=
-----END PUBLIC KEY-----
";

/// A curve over the P-256 field that is not in any registry.
pub const CUSTOM_CURVE: &str = "-----BEGIN PUBLIC KEY-----
MIIBMzCB7AYHKoZIzj0CATCB4AIBATAsBgcqhkjOPQEBAiEA/////wAAAAEAAAAA
AAAAAAAAAAD///////////////8wRAQg/////wAAAAEAAAAAAAAAAAAAAAD/////
//////////wEIP////8AAAAA/+hvA68WsQWh5tW1En63iNxzcm5XdXgBBEEEAAAA
AAAAAAAAAAAAAAAAAAAAAAAAAAAAEjRWeJCrze8AAAAAAAAAAAAAAAAAAAAAAAAA
AAAAAADerb7vyv66vgIhAP/////////////////////////////////////////x
AgEBA0IABAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAGbOD9GoGDqd5I
fWafu0X6Rxb4uYa6ldjnv8kP1kfiJyo=
-----END PUBLIC KEY-----
";

pub const P256_OPENSSH: &str = "ecdsa-sha2-nistp256 AAAAE2VjZHNhLXNoYTItbmlzdHAyNTYAAAAIbmlzdHAyNTYAAABBBFLqaPmiqAg8ppmQ8KlejrwUcB6vFcvJ/WccKUsjcf5BG8QwFpkhXjnuZV1P8sdLnZ4hdpLzQkAogINQsBfn38c=";
pub const P521_OPENSSH: &str = "ecdsa-sha2-nistp521 AAAAE2VjZHNhLXNoYTItbmlzdHA1MjEAAAAIbmlzdHA1MjEAAACFBAC9xRMa7P2Tmaz4YyXB1kubKEif3dI0Y9u+dwvk/WOZ1BFne/iM/jyF7GO8/EoLUkNpOhcD4xvTG4ahhNGls3GA3QAIMo+HQRJHOA9zwrqtb5cR0ByWU4B6axWKzHEPHIRM1mlUMySG6/Kz/CAULvjjw2U6W7s0MbeSgm5HHq72U+Sydg==";
pub const P256_FINGERPRINT: &str = "SHA256:aJ4BoDQCVXM4zZ2vA+RjKNej+Oo/qP9x0dRfCDCt5gY";
pub const P521_FINGERPRINT: &str = "SHA256:B4Z8Ccr97wLRWe2ENnYd/VA5PwzbfQNpBoNrUu7uHP8";
