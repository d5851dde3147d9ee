//! Content providers - one function per documentation section.
//!
//! Each provider returns the structured blocks for its section. The text is
//! static, trusted data; nothing here is parsed at runtime. Heading ids are
//! the anchors the table of contents and deep links resolve against, so they
//! must stay unique within a section.

use crate::types::Block;
use Block::{Callout, Code, Heading, List, Paragraph};

pub fn introduction() -> Vec<Block> {
    vec![
        Heading { id: "what-is-quantzen-sdk", text: "What is the QuantZen SDK?", level: 2 },
        Paragraph(
            "QuantZen SDK is a library that adds quantum-resistant cryptography to \
             blockchain wallets and applications. It enables wallets to generate \
             quantum-safe signatures alongside traditional ECDSA signatures, protecting \
             users from future quantum computing attacks.",
        ),
        Callout {
            title: "In Simple Terms",
            body: "Traditional wallets use ECDSA signatures (vulnerable to quantum \
                   computers). QuantZen adds a second layer: Dilithium signatures \
                   (quantum-resistant). Your wallet stays protected even when quantum \
                   computers break ECDSA.",
        },
        Heading { id: "why-quantum-proofing-matters", text: "Why Quantum-Proofing Matters", level: 2 },
        Paragraph(
            "Current blockchain wallets use ECDSA for signing transactions. While secure \
             today, quantum computers can break ECDSA in minutes once they become powerful \
             enough. QuantZen provides a dual signature system that combines:",
        ),
        List(&[
            "ECDSA signatures - for blockchain compatibility (works today)",
            "Dilithium signatures - for quantum protection (future-proof)",
        ]),
        Paragraph(
            "Even if quantum computers break ECDSA, funds remain protected because \
             Dilithium signatures cannot be broken by quantum computers.",
        ),
    ]
}

pub fn installation() -> Vec<Block> {
    vec![
        Paragraph("Install the SDK using npm:"),
        Code { id: "npm-install", lang: "bash", source: "npm install @quantzen/sdk" },
        Paragraph("Or use via CDN:"),
        Code {
            id: "cdn-install",
            lang: "html",
            source: "<script src=\"https://cdn.jsdelivr.net/npm/@quantzen/sdk/dist/quantzen-sdk.umd.min.js\"></script>",
        },
    ]
}

pub fn quick_start() -> Vec<Block> {
    vec![
        Paragraph("Get a wallet quantum-proofed in three calls:"),
        Code {
            id: "quick-start-code",
            lang: "typescript",
            source: "import { QuantzenWallet, MetaMaskAdapter } from '@quantzen/sdk';\n\n\
                     const wallet = new QuantzenWallet(new MetaMaskAdapter());\n\
                     await wallet.connect();\n\
                     await wallet.quantumProofWallet();",
        },
        Paragraph(
            "That is the entire integration for a wallet provider. Transactions signed \
             through the wallet now carry both signature layers.",
        ),
    ]
}

pub fn wallet_overview() -> Vec<Block> {
    vec![
        Paragraph(
            "Wallet providers integrate the SDK once and every account they manage \
             becomes quantum-proof. No backend changes, no migration, no new key \
             ceremony for users.",
        ),
        List(&[
            "Integration time: about 5 minutes",
            "Code required: three SDK calls",
            "Infrastructure: none - everything runs client-side",
        ]),
    ]
}

pub fn wallet_integration() -> Vec<Block> {
    vec![
        Heading { id: "step-1", text: "Step 1: Install SDK", level: 2 },
        Code { id: "step1-install", lang: "bash", source: "npm install @quantzen/sdk" },
        Heading { id: "step-2", text: "Step 2: Import and Initialize", level: 2 },
        Code {
            id: "step2-init",
            lang: "typescript",
            source: "import { QuantzenWallet, MetaMaskAdapter } from '@quantzen/sdk';\n\n\
                     const wallet = new QuantzenWallet(new MetaMaskAdapter());\n\
                     await wallet.connect();",
        },
        Heading { id: "step-3", text: "Step 3: Enable Quantum-Proofing", level: 2 },
        Code {
            id: "step3-quantum",
            lang: "typescript",
            source: "// Enable quantum-proofing for the wallet\nawait wallet.quantumProofWallet();",
        },
        Heading { id: "step-4", text: "Step 4: Update Transaction Signing", level: 2 },
        Code {
            id: "step4-signing",
            lang: "typescript",
            source: "// Replace your existing transaction signing:\n\
                     const signed = await wallet.signTransaction(tx);\n\
                     // signed.ecdsa and signed.dilithium are both populated",
        },
        Heading { id: "step-5", text: "Step 5: Handle Backup Export (Optional)", level: 2 },
        Code {
            id: "step5-backup",
            lang: "typescript",
            source: "// Export backup for user\nconst backup = await wallet.exportBackup(passphrase);",
        },
    ]
}

pub fn wallet_features() -> Vec<Block> {
    vec![
        Paragraph("Everything the SDK exposes to wallet providers:"),
        List(&[
            "Dual signing - ECDSA plus Dilithium on every transaction",
            "Deterministic key derivation from the existing wallet seed",
            "Encrypted backup export and import",
            "Quantum status reporting per account",
            "Optional IPFS audit records",
        ]),
    ]
}

pub fn wallet_examples() -> Vec<Block> {
    vec![
        Paragraph("A complete provider integration, end to end:"),
        Code {
            id: "complete-example",
            lang: "typescript",
            source: "import { QuantzenWallet, MetaMaskAdapter } from '@quantzen/sdk';\n\n\
                     const wallet = new QuantzenWallet(new MetaMaskAdapter());\n\
                     await wallet.connect();\n\
                     await wallet.quantumProofWallet();\n\n\
                     const signed = await wallet.signTransaction({\n\
                       to: '0xabc...',\n\
                       value: '1000000000000000000',\n\
                     });",
        },
    ]
}

pub fn dapp_overview() -> Vec<Block> {
    vec![
        Paragraph(
            "dApps get quantum protection for free when the connected wallet ships the \
             SDK. Direct integration is optional and adds verification tooling: a dApp \
             can check that an incoming transaction carries a valid Dilithium signature \
             before accepting it.",
        ),
        Paragraph(
            "Integration cost for a dApp is zero when the wallet supports QuantZen, \
             or roughly fifteen minutes for the optional verification path.",
        ),
    ]
}

pub fn dapp_integration() -> Vec<Block> {
    vec![
        Heading { id: "option-1", text: "Option 1: No Integration", level: 2 },
        Paragraph(
            "If the user's wallet runs the SDK, transactions are already dual-signed. \
             The dApp does nothing.",
        ),
        Heading { id: "option-2", text: "Option 2: Verify Signatures", level: 2 },
        Code {
            id: "verify-example",
            lang: "typescript",
            source: "import { QuantzenSDK } from '@quantzen/sdk';\n\n\
                     const ok = await QuantzenSDK.verifyTransaction(tx);",
        },
        Heading { id: "option-3", text: "Option 3: Require Quantum-Proofing", level: 2 },
        Paragraph(
            "A dApp can refuse transactions that lack a Dilithium layer, making \
             quantum protection mandatory for its users.",
        ),
    ]
}

pub fn dapp_verification() -> Vec<Block> {
    vec![
        Heading { id: "transaction-verification", text: "Transaction Verification", level: 2 },
        Paragraph(
            "Verify both signature layers of a submitted transaction against the \
             account's registered public keys.",
        ),
        Code {
            id: "tx-verify",
            lang: "typescript",
            source: "const status = await QuantzenSDK.getQuantumStatus(address);\n\
                     if (status.isQuantumProof) {\n\
                       await QuantzenSDK.verifyTransaction(tx);\n\
                     }",
        },
        Heading { id: "audit-record-access", text: "Audit Record Access", level: 2 },
        Paragraph(
            "When IPFS storage is configured, every quantum-proofing event leaves an \
             audit record that third parties can fetch and verify independently.",
        ),
    ]
}

pub fn how_it_works() -> Vec<Block> {
    vec![
        Heading { id: "architecture", text: "Architecture", level: 2 },
        Paragraph(
            "The SDK sits between the wallet UI and the chain RPC. Key generation, \
             encryption and signing all happen client-side; no server component exists.",
        ),
        Heading { id: "signing-flow", text: "Signing Flow", level: 2 },
        List(&[
            "Wallet requests a signature for a transaction",
            "SDK produces the ECDSA signature as usual",
            "SDK derives the Dilithium key and signs the same payload",
            "Both signatures are attached and broadcast together",
        ]),
    ]
}

pub fn dual_signatures() -> Vec<Block> {
    vec![
        Paragraph(
            "A dual signature binds one transaction to two independent cryptographic \
             schemes. Breaking the transaction requires breaking both.",
        ),
        Heading { id: "ecdsa-layer", text: "ECDSA Layer", level: 2 },
        Paragraph(
            "The classical signature the chain validates today. Unchanged, so every \
             existing node accepts the transaction.",
        ),
        Heading { id: "dilithium-layer", text: "Dilithium Layer", level: 2 },
        Paragraph(
            "A lattice-based signature standardized by NIST (ML-DSA). Quantum \
             computers offer no known advantage against it.",
        ),
    ]
}

pub fn key_management() -> Vec<Block> {
    vec![
        Heading { id: "encryption", text: "Encryption", level: 2 },
        Paragraph(
            "Dilithium private keys are encrypted at rest with AES-256-GCM; the \
             encryption key is derived from the wallet seed, never stored.",
        ),
        Heading { id: "storage", text: "Storage", level: 2 },
        Paragraph(
            "Encrypted keys live in the storage adapter the host configures: browser \
             storage, file, or a custom backend.",
        ),
        Heading { id: "backup-recovery", text: "Backup & Recovery", level: 2 },
        List(&[
            "Backup file: import an encrypted backup JSON file",
            "Seed recovery: regenerate keys from the wallet seed (deterministic)",
            "Cross-device: import the backup on a new device",
        ]),
    ]
}

pub fn security() -> Vec<Block> {
    vec![
        Heading { id: "what-matters-most", text: "What Matters Most", level: 2 },
        Heading { id: "keys-never-plaintext", text: "Keys Are Never Plaintext", level: 3 },
        Paragraph("Private key material is encrypted before it ever touches storage."),
        Heading { id: "dual-signature-requirement", text: "Dual Signature Requirement", level: 3 },
        Paragraph("Both layers must validate; a single broken scheme is not enough."),
        Heading { id: "backend-validation", text: "Backend Validation", level: 3 },
        Paragraph("Verification never trusts client-reported status; it re-checks signatures."),
        Heading { id: "key-replacement-prevention", text: "Key Replacement Prevention", level: 3 },
        Paragraph("Registered quantum keys are bound to the account; swaps require the seed."),
        Heading { id: "replay-attack-prevention", text: "Replay Attack Prevention", level: 3 },
        Paragraph("Every Dilithium signature covers the chain id and nonce."),
        Heading { id: "algorithm-options", text: "Algorithm Options", level: 3 },
        List(&[
            "Dilithium2 - fast, smaller signatures; recommended default",
            "Dilithium3 - balanced security and performance",
            "Dilithium5 - highest security margin",
        ]),
    ]
}

pub fn api_reference() -> Vec<Block> {
    vec![
        Paragraph("Complete reference for all QuantZen SDK APIs and methods."),
        List(&[
            "Core Methods - essential SDK methods for wallet operations",
            "Wallet Adapters - adapter interfaces for different providers",
            "Storage Options - configure storage for wallet data",
            "Configuration - SDK options and environment setup",
        ]),
        Heading { id: "quick-reference", text: "Quick Reference", level: 2 },
        Code {
            id: "quick-ref",
            lang: "typescript",
            source: "connect()\ndisconnect()\nsignTransaction()\ngetBalance()",
        },
    ]
}

pub fn core_methods() -> Vec<Block> {
    vec![
        Heading { id: "quantumproof-wallet", text: "quantumProofWallet()", level: 2 },
        Paragraph("Generates the Dilithium keypair and registers it for the account."),
        Code {
            id: "api-quantumproof",
            lang: "typescript",
            source: "await wallet.quantumProofWallet({ algorithm: 'dilithium2' });",
        },
        Heading { id: "sign-transaction", text: "signTransaction()", level: 2 },
        Paragraph("Signs with ECDSA and Dilithium, returning both signatures."),
        Heading { id: "get-quantum-status", text: "getQuantumStatus()", level: 2 },
        Paragraph("Reports whether an address has a registered quantum key."),
        Heading { id: "verify-from-ipfs", text: "verifyFromIPFS()", level: 2 },
        Paragraph("Fetches an audit record and re-validates its signatures."),
    ]
}

pub fn wallet_adapters() -> Vec<Block> {
    vec![
        Heading { id: "available-adapters", text: "Available Adapters", level: 2 },
        List(&[
            "MetaMaskAdapter - EVM chains via MetaMask",
            "PhantomAdapter - Solana via Phantom",
            "WalletConnectAdapter - any WalletConnect v2 wallet",
            "CustomAdapter - implement the WalletAdapter interface",
        ]),
        Heading { id: "walletadapter-interface", text: "WalletAdapter Interface", level: 3 },
        Code {
            id: "adapter-interface",
            lang: "typescript",
            source: "interface WalletAdapter {\n\
                     \u{20} connect(): Promise<string>;\n\
                     \u{20} signMessage(msg: Uint8Array): Promise<Signature>;\n\
                     \u{20} getSeed(): Promise<Uint8Array>;\n\
                     }",
        },
    ]
}

pub fn storage_options() -> Vec<Block> {
    vec![
        Heading { id: "storage-types", text: "Storage Types", level: 2 },
        List(&[
            "LocalStorageAdapter - browser local storage (default)",
            "IndexedDBAdapter - larger payloads, same origin rules",
            "IPFSAdapter - pinned audit records via Pinata or a node",
            "MemoryAdapter - ephemeral, for tests",
        ]),
        Paragraph("All adapters store ciphertext only; plaintext keys never leave memory."),
    ]
}

pub fn configuration() -> Vec<Block> {
    vec![
        Heading { id: "basic-config", text: "Basic Configuration", level: 2 },
        Code {
            id: "config-example",
            lang: "typescript",
            source: "const wallet = new QuantzenWallet(adapter, {\n\
                     \u{20} algorithm: 'dilithium2',\n\
                     \u{20} storage: new LocalStorageAdapter(),\n\
                     \u{20} ipfs: { pinata: { apiKey: '...' } },\n\
                     });",
        },
        Paragraph("Every option has a working default; an empty config is valid."),
    ]
}

pub fn example_metamask() -> Vec<Block> {
    vec![
        Paragraph("Quantum-proofing a MetaMask wallet on an EVM chain:"),
        Code {
            id: "metamask-example",
            lang: "typescript",
            source: "import { QuantzenWallet, MetaMaskAdapter } from '@quantzen/sdk';\n\n\
                     const wallet = new QuantzenWallet(new MetaMaskAdapter());\n\
                     await wallet.connect();\n\
                     await wallet.quantumProofWallet();\n\
                     const signed = await wallet.signTransaction(tx);",
        },
    ]
}

pub fn example_phantom() -> Vec<Block> {
    vec![
        Paragraph("The Solana flow is identical apart from the adapter:"),
        Code {
            id: "phantom-example",
            lang: "typescript",
            source: "import { QuantzenWallet, PhantomAdapter } from '@quantzen/sdk';\n\n\
                     const wallet = new QuantzenWallet(new PhantomAdapter());\n\
                     await wallet.connect();\n\
                     await wallet.quantumProofWallet();",
        },
    ]
}

pub fn example_custom() -> Vec<Block> {
    vec![
        Paragraph("Any wallet can participate by implementing the adapter interface:"),
        Code {
            id: "custom-example",
            lang: "typescript",
            source: "class MyAdapter implements WalletAdapter {\n\
                     \u{20} async connect() { /* ... */ }\n\
                     \u{20} async signMessage(msg) { /* ... */ }\n\
                     \u{20} async getSeed() { /* ... */ }\n\
                     }\n\n\
                     const wallet = new QuantzenWallet(new MyAdapter());",
        },
    ]
}

pub fn faq() -> Vec<Block> {
    vec![
        Heading { id: "common-questions", text: "Common Questions", level: 2 },
        Heading { id: "integration-time", text: "How long does integration take?", level: 3 },
        Paragraph(
            "For wallet providers: about 5 minutes. For dApps: zero if the wallet \
             supports it, otherwise 10-15 minutes for optional verification.",
        ),
        Heading { id: "infrastructure", text: "Do I need to deploy any infrastructure?", level: 3 },
        Paragraph(
            "No. The SDK works entirely client-side. The only optional component is \
             IPFS for audit record storage.",
        ),
        Heading { id: "key-recovery", text: "What happens if a user loses their keys?", level: 3 },
        List(&[
            "Backup file: import encrypted backup JSON",
            "Seed recovery: regenerate keys from the wallet seed",
            "Cross-device: import backup on a new device",
        ]),
        Heading { id: "cost", text: "How much does it cost?", level: 3 },
        Paragraph(
            "The SDK is free and open-source (MIT). The only costs are normal gas \
             fees and optional IPFS pinning.",
        ),
        Heading { id: "algorithm-choice", text: "Which algorithms should I use?", level: 3 },
        Paragraph("Dilithium2 for most cases; Dilithium3 or 5 for higher-value flows."),
        Heading { id: "blockchain-support", text: "Does it work with all blockchains?", level: 3 },
        Paragraph(
            "Full support for EVM chains, Solana, and Bitcoin. Move-based chains have \
             framework support in progress.",
        ),
    ]
}

pub fn troubleshooting() -> Vec<Block> {
    vec![
        Heading { id: "connection-issues", text: "Connection Issues", level: 2 },
        Paragraph(
            "If connect() rejects, confirm the wallet extension is unlocked and the \
             page origin is allowed in the wallet's connected-sites list.",
        ),
        Heading { id: "signature-mismatch", text: "Signature Mismatch", level: 2 },
        Paragraph(
            "A Dilithium verification failure almost always means the payload was \
             mutated after signing. Sign the exact bytes you broadcast.",
        ),
        Heading { id: "storage-quota", text: "Storage Quota", level: 2 },
        Paragraph(
            "Encrypted Dilithium keys are a few kilobytes. If browser storage is full, \
             switch to the IndexedDB adapter.",
        ),
    ]
}

pub fn additional_resources() -> Vec<Block> {
    vec![
        Heading { id: "documentation", text: "Documentation", level: 2 },
        List(&[
            "API reference - every method, typed",
            "Integration guides - wallet and dApp walkthroughs",
        ]),
        Heading { id: "support", text: "Support", level: 2 },
        List(&[
            "GitHub issues for bugs and feature requests",
            "Discord for integration questions",
        ]),
        Heading { id: "learning", text: "Learning", level: 2 },
        List(&[
            "NIST post-quantum cryptography standardization",
            "ML-DSA (Dilithium) specification",
        ]),
    ]
}
