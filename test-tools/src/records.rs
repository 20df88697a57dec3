use serde_json::{json, Value};

/// A trimmed jsonParsed vote account record as returned by a
/// getProgramAccounts scan of the vote program.
pub fn parsed_vote_account_record() -> Value {
    json!({
        "account": {
            "data": {
                "parsed": {
                    "info": {
                        "authorizedVoters": [
                            {
                                "authorizedVoter":
                                    "6poikjtKFzySv2zrfEJCQorTDJWmoqCLPbSXeNLHyvL3",
                                "epoch": 318
                            }
                        ],
                        "authorizedWithdrawer":
                            "4Zk3cLQdPiJuyFXgfaPvUZ2tXL6TVSmwswJGws8wN5Xi",
                        "commission": 10,
                        "nodePubkey":
                            "6poikjtKFzySv2zrfEJCQorTDJWmoqCLPbSXeNLHyvL3",
                        "rootSlot": 137427602
                    },
                    "type": "vote"
                },
                "program": "vote",
                "space": 3731
            },
            "executable": false,
            "lamports": 26371632207u64,
            "owner": "Vote111111111111111111111111111111111111111",
            "rentEpoch": 318
        },
        "pubkey": "B2vsqPPAiLMBZqhuqQdvx24ghg4AxMw76pp6V9kNTVms"
    })
}

/// A trimmed jsonParsed delegated stake account record.
pub fn parsed_stake_account_record() -> Value {
    json!({
        "account": {
            "data": {
                "parsed": {
                    "info": {
                        "meta": {
                            "authorized": {
                                "staker":
                                    "447YEohqKbW9S2WjeaJtcCHLx8RhsgWRktcpnr5Dsp5A",
                                "withdrawer":
                                    "EhYXq3ANp5nAerUpbSgd7VK2RRcxK1zNuSQ755G5Mtxx"
                            },
                            "rentExemptReserve": "2282880"
                        },
                        "stake": {
                            "creditsObserved": 21464248,
                            "delegation": {
                                "activationEpoch": "261",
                                "deactivationEpoch": "18446744073709551615",
                                "stake": "1023944272",
                                "voter":
                                    "8zCJw6dETsPGCCkre459fDoM4YjK6BCVqqfSyyhRXtaT",
                                "warmupCooldownRate": 0.25
                            }
                        }
                    },
                    "type": "delegated"
                },
                "program": "stake",
                "space": 200
            },
            "executable": false,
            "lamports": 1026227152u64,
            "owner": "Stake11111111111111111111111111111111111111",
            "rentEpoch": 317
        },
        "pubkey": "BY8yWGqFhjpUuzJytaqnBMrqFPZ6cH6muaA2PkpKcpJE"
    })
}
