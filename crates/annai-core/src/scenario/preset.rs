//! The built-in Subversion→Git migration scenario.
//!
//! This is the canonical compiled dataset the live wizard runs off. The
//! admin surface may let a human edit an exported copy for documentation
//! purposes, but the engine always interprets this table.

use super::graph::ScenarioGraph;
use super::model::{AnswerCapture, BranchRule, BranchTarget, CheckGuide, Phase, Step};
use crate::rule::RuleKind;
use crate::session::EnvironmentType;
use std::sync::OnceLock;

/// Static storage for the compiled scenario (initialized once).
static SCENARIO: OnceLock<ScenarioGraph> = OnceLock::new();

/// Returns the built-in migration scenario.
///
/// The dataset is compiled and validated on first access and cached for the
/// lifetime of the process.
pub fn builtin_scenario() -> &'static ScenarioGraph {
    SCENARIO.get_or_init(|| {
        ScenarioGraph::new(builtin_steps(), builtin_branches())
            .expect("builtin scenario is internally consistent")
    })
}

fn builtin_steps() -> Vec<Step> {
    let mut steps = Vec::new();
    steps.extend(preparation_steps());
    steps.extend(selection_steps());
    steps.extend(account_creation_steps());
    steps.extend(migration_steps());
    steps.extend(repository_steps());
    steps.extend(setup_steps());
    steps.extend(verification_steps());
    steps.extend(rules_steps());
    steps.extend(rollout_steps());
    steps
}

fn builtin_branches() -> Vec<BranchRule> {
    vec![
        // 環境選択後: SaaS版はアカウント作成へ、セルフホスト版はアカウント作成を飛ばして移行実行へ
        BranchRule {
            phase: Phase::Selection,
            step_id: "environment-selection".to_string(),
            keywords: vec![],
            requires_environment: Some(EnvironmentType::SelfHosted),
            target: BranchTarget::Phase(Phase::Migration),
        },
        BranchRule {
            phase: Phase::Selection,
            step_id: "environment-selection".to_string(),
            keywords: vec![],
            requires_environment: Some(EnvironmentType::Saas),
            target: BranchTarget::Phase(Phase::AccountCreation),
        },
        // アカウント作成チェック
        BranchRule {
            phase: Phase::AccountCreation,
            step_id: "account-check".to_string(),
            keywords: vec!["セルフホスト".to_string()],
            requires_environment: None,
            target: BranchTarget::Phase(Phase::Migration),
        },
        BranchRule {
            phase: Phase::AccountCreation,
            step_id: "account-check".to_string(),
            keywords: vec!["アカウントを持っている".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("account-verification".to_string()),
        },
        BranchRule {
            phase: Phase::AccountCreation,
            step_id: "github-account-creation".to_string(),
            keywords: vec!["GitLab".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("gitlab-account-creation".to_string()),
        },
        // 認証方法の選択
        BranchRule {
            phase: Phase::Repository,
            step_id: "authentication-method".to_string(),
            keywords: vec!["SSH".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("ssh-key-generation".to_string()),
        },
        BranchRule {
            phase: Phase::Repository,
            step_id: "authentication-method".to_string(),
            keywords: vec!["HTTPS".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("https-token-setup".to_string()),
        },
        // SSH鍵生成からの分岐（HTTPS切り替えが鍵登録より先に評価される）
        BranchRule {
            phase: Phase::Repository,
            step_id: "ssh-key-generation".to_string(),
            keywords: vec!["HTTPS認証に変更".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("https-token-setup".to_string()),
        },
        BranchRule {
            phase: Phase::Repository,
            step_id: "ssh-key-generation".to_string(),
            keywords: vec!["生成完了".to_string(), "既に鍵がある".to_string()],
            requires_environment: Some(EnvironmentType::Saas),
            target: BranchTarget::Step("ssh-key-registration-github".to_string()),
        },
        BranchRule {
            phase: Phase::Repository,
            step_id: "ssh-key-generation".to_string(),
            keywords: vec!["生成完了".to_string(), "既に鍵がある".to_string()],
            requires_environment: None,
            target: BranchTarget::Step("ssh-key-registration-gitlab".to_string()),
        },
    ]
}

fn preparation_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "welcome",
            Phase::Preparation,
            "SubversionからGitへの移行を始めます。\n\nまず、移行前の準備を行います。",
            &["準備を始める"],
        ),
        Step::free_text(
            "svn-repo-check",
            Phase::Preparation,
            "現在使用しているSubversionリポジトリのURLを入力してください。\n\n（例: https://svn.example.com/repos/project）",
        )
        .with_capture(AnswerCapture::SvnRepositoryUrl),
        Step::choice(
            "svn-structure-check",
            Phase::Preparation,
            "Subversionリポジトリの構造を確認します。\n\n以下の情報を教えてください：\n- ブランチはありますか？\n- タグはありますか？\n- 主要なブランチ名は？",
            &["ブランチ・タグあり", "ブランチ・タグなし", "確認が必要"],
        )
        .with_check_guide(CheckGuide {
            title: "Subversionリポジトリ構造の確認方法".to_string(),
            check_points: vec![
                "リポジトリのURLを確認".to_string(),
                "ブランチの有無を確認（通常は branches/ ディレクトリ）".to_string(),
                "タグの有無を確認（通常は tags/ ディレクトリ）".to_string(),
                "trunk（メインブランチ）の存在を確認".to_string(),
            ],
            commands: vec![
                "svn list <repository-url>".to_string(),
                "svn list <repository-url>/branches".to_string(),
                "svn list <repository-url>/tags".to_string(),
            ],
            visual_guide: vec![
                "SubversionリポジトリのURLにアクセス".to_string(),
                "ディレクトリ構造を確認".to_string(),
                "branches/ と tags/ フォルダの有無を確認".to_string(),
            ],
        }),
        Step::choice(
            "backup-confirm",
            Phase::Preparation,
            "移行前にSubversionリポジトリのバックアップを取得してください。\n\nバックアップは取得済みですか？",
            &["バックアップ済み", "これから取得する"],
        ),
    ]
}

fn selection_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "environment-selection",
            Phase::Selection,
            "Git環境の方式を選択してください。",
            &["A. SaaS版（GitHub/GitLab）", "B. セルフホスト版（社内サーバー）"],
        )
        .with_capture(AnswerCapture::Environment),
    ]
}

fn account_creation_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "account-check",
            Phase::AccountCreation,
            "Gitアカウントの作成状況を確認します。\n\n**SaaS版（GitHub/GitLab）を選択した場合：**\nGitHubまたはGitLabのアカウントが必要です。\n\n既にアカウントをお持ちですか？",
            &[
                "アカウントを持っている",
                "アカウントを作成する必要がある",
                "セルフホスト版を選択したので不要",
            ],
        ),
        Step::choice(
            "github-account-creation",
            Phase::AccountCreation,
            "GitHubアカウントを作成します。\n\n**手順：**\n1. GitHubの公式サイト（https://github.com）にアクセス\n2. 「Sign up」ボタンをクリック\n3. ユーザー名、メールアドレス、パスワードを入力\n4. メール認証を完了\n5. プラン選択（無料プランで問題ありません）\n\n**注意事項：**\n- ユーザー名は後から変更できないため、慎重に選択してください\n- メールアドレスは実在するものを使用してください\n- パスワードは強力なものを設定してください\n\nアカウントの作成は完了しましたか？",
            &["作成完了", "作成中", "エラーが発生", "GitLabを使用する"],
        )
        .with_capture(AnswerCapture::AccountCreated),
        Step::choice(
            "gitlab-account-creation",
            Phase::AccountCreation,
            "GitLabアカウントを作成します。\n\n**手順：**\n1. GitLabの公式サイト（https://gitlab.com）にアクセス\n2. 「Register」ボタンをクリック\n3. ユーザー名、メールアドレス、パスワードを入力\n4. メール認証を完了\n\n**注意事項：**\n- ユーザー名は後から変更できないため、慎重に選択してください\n- メールアドレスは実在するものを使用してください\n- パスワードは強力なものを設定してください\n\nアカウントの作成は完了しましたか？",
            &["作成完了", "作成中", "エラーが発生"],
        )
        .with_capture(AnswerCapture::AccountCreated),
        Step::choice(
            "account-verification",
            Phase::AccountCreation,
            "アカウントの確認を行います。\n\n**確認項目：**\n- アカウントにログインできること\n- メール認証が完了していること\n- プロフィール設定が完了していること\n\nアカウントの確認は完了しましたか？",
            &["確認完了", "確認が必要"],
        ),
    ]
}

fn migration_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "migration-tool-selection",
            Phase::Migration,
            "SubversionからGitへの移行ツールを選択してください。\n\n**推奨ツール:**\n- **svn2git**: 履歴を保持した移行に最適\n- **git-svn**: Git標準ツール、段階的移行に適している",
            &["svn2gitを使用", "git-svnを使用", "ツールについて詳しく知りたい"],
        )
        .with_check_guide(CheckGuide {
            title: "移行ツールの選択ポイント".to_string(),
            check_points: vec![
                "svn2git: 履歴を完全に保持したい場合に推奨".to_string(),
                "git-svn: Git標準ツールで、段階的な移行に適している".to_string(),
                "既存のブランチ・タグ構造を保持する必要があるか確認".to_string(),
                "移行後の履歴の重要性を確認".to_string(),
            ],
            commands: vec![],
            visual_guide: vec![
                "移行するリポジトリの規模を確認".to_string(),
                "ブランチ・タグの有無を確認".to_string(),
                "履歴の完全性の重要度を確認".to_string(),
            ],
        }),
        Step::choice(
            "migration-execution",
            Phase::Migration,
            "移行を実行します。\n\n**svn2gitの場合:**\n```bash\n# svn2gitのインストール（未インストールの場合）\ngem install svn2git\n\n# 移行実行\nsvn2git <svn-repository-url> --authors authors.txt\n```\n\n**git-svnの場合:**\n```bash\ngit svn clone <svn-repository-url> --stdlayout\n```\n\n移行を実行しましたか？",
            &["移行完了", "エラーが発生", "まだ実行していない"],
        ),
        Step::choice(
            "migration-check",
            Phase::Migration,
            "移行結果を確認します。\n\n以下のコマンドで履歴を確認してください：\n```bash\ngit log --oneline\n```\n\n履歴は正しく移行されていますか？",
            &["履歴は正しく移行されている", "履歴が不完全", "確認が必要"],
        )
        .with_check_guide(CheckGuide {
            title: "移行結果の確認ポイント".to_string(),
            check_points: vec![
                "コミット履歴が表示されること".to_string(),
                "コミットメッセージが正しく表示されること".to_string(),
                "コミット日時が正しいこと".to_string(),
                "コミット数がSubversionと一致すること（概算）".to_string(),
            ],
            commands: vec![
                "git log --oneline".to_string(),
                "git log --oneline --all".to_string(),
                "git log --stat".to_string(),
            ],
            visual_guide: vec![
                "ターミナルで `git log --oneline` を実行".to_string(),
                "コミット一覧が表示されることを確認".to_string(),
                "各コミットにハッシュとメッセージが表示されることを確認".to_string(),
            ],
        }),
    ]
}

fn repository_steps() -> Vec<Step> {
    vec![
        Step::free_text(
            "system-name",
            Phase::Repository,
            "システム名を入力してください。\n\n**システム名とは：**\n移行するプロジェクトやアプリケーションの名前です。\nGitHubやGitLabなどのサービス名ではなく、あなたが開発しているシステム自体の名前を入力してください。\n\n**入力例：**\n- `user-management`（ユーザー管理システム）\n- `order-system`（注文管理システム）\n- `inventory-app`（在庫管理アプリ）\n- `payment-gateway`（決済ゲートウェイ）\n\n**注意：**\n- 英数字とハイフン（-）を使用できます\n- 小文字で入力することを推奨します",
        )
        .with_capture(AnswerCapture::SystemName),
        Step::free_text(
            "admin-id",
            Phase::Repository,
            "管理者IDを入力してください。\n\n**管理者IDとは：**\nGitリポジトリの管理者となるユーザーのIDです。\n\n**入力例：**\n- `tanaka-taro`（社員ID）\n- `admin`（管理者アカウント）\n- `dev-team-lead`（チームリーダーID）\n\n**注意：**\n- 通常は社員IDやユーザー名を使用します\n- GitHub/GitLabのアカウント名とは異なる場合があります",
        )
        .with_capture(AnswerCapture::AdminId),
        Step::free_text(
            "repository-name",
            Phase::Repository,
            "Gitリポジトリ名を入力してください。",
        )
        .with_validator(RuleKind::Naming),
        Step::choice(
            "repository-creation",
            Phase::Repository,
            "GitHub/GitLabでリポジトリを作成します。\n\n**GitHubの場合：**\n1. GitHubにログイン\n2. 右上の「+」ボタンから「New repository」を選択\n3. リポジトリ名を入力（例: prj-dev01-my-system）\n4. 公開設定を選択（Private推奨）\n5. 「Create repository」をクリック\n\n**GitLabの場合：**\n1. GitLabにログイン\n2. 「New project」または「+」ボタンから「New project」を選択\n3. 「Create blank project」を選択\n4. プロジェクト名を入力\n5. 公開設定を選択（Private推奨）\n6. 「Create project」をクリック\n\nリポジトリの作成は完了しましたか？",
            &["作成完了", "作成中", "エラーが発生"],
        )
        .with_check_guide(CheckGuide {
            title: "リポジトリ作成の確認ポイント".to_string(),
            check_points: vec![
                "リポジトリ名が社内命名規則に従っている".to_string(),
                "公開設定が適切（通常はPrivate推奨）".to_string(),
                "リポジトリのURLを確認・コピー".to_string(),
                "リポジトリが正常に作成されている".to_string(),
            ],
            commands: vec![],
            visual_guide: vec![
                "GitHub/GitLabのダッシュボードでリポジトリが表示される".to_string(),
                "リポジトリのURLを確認（後で使用します）".to_string(),
                "リポジトリの設定ページで公開設定を確認".to_string(),
            ],
        }),
        Step::choice(
            "authentication-method",
            Phase::Repository,
            "認証方法を選択してください。\n\n**認証方法：**\n- **SSH鍵認証（推奨）**: セキュアで便利。一度設定すればパスワード入力不要\n- **HTTPS認証**: 簡単だが、毎回パスワードまたはトークン入力が必要\n\nどちらの認証方法を使用しますか？",
            &["SSH鍵認証を使用", "HTTPS認証を使用", "どちらかわからない"],
        ),
        Step::choice(
            "ssh-key-generation",
            Phase::Repository,
            "SSH鍵を生成します。\n\n**手順：**\n1. ターミナルを開く\n2. 以下のコマンドを実行：\n```bash\nssh-keygen -t ed25519 -C \"your_email@example.com\"\n```\n3. ファイル保存場所の確認（Enterでデフォルト）\n4. パスフレーズの設定（空でも可、セキュリティのため推奨）\n\n**注意：**\n- 既にSSH鍵がある場合は、新しい鍵を作成する必要はありません\n- `~/.ssh/id_ed25519.pub` が公開鍵ファイルです\n\nSSH鍵の生成は完了しましたか？",
            &["生成完了", "既に鍵がある", "エラーが発生", "HTTPS認証に変更"],
        ),
        Step::choice(
            "ssh-key-registration-github",
            Phase::Repository,
            "GitHubにSSH鍵を登録します。\n\n**手順：**\n1. 公開鍵をコピー：\n```bash\ncat ~/.ssh/id_ed25519.pub\n```\n2. GitHubにログイン\n3. 右上のプロフィールアイコン → 「Settings」\n4. 左メニューから「SSH and GPG keys」を選択\n5. 「New SSH key」をクリック\n6. Titleに任意の名前を入力（例: My Laptop）\n7. Keyに公開鍵を貼り付け\n8. 「Add SSH key」をクリック\n\n**確認：**\n```bash\nssh -T git@github.com\n```\n上記コマンドで「Hi [username]! You've successfully authenticated...」と表示されれば成功です。\n\nSSH鍵の登録は完了しましたか？",
            &["登録完了", "エラーが発生", "確認が必要"],
        )
        .with_check_guide(ssh_registration_check_guide(
            "GitHubのSettingsページにアクセスできる",
            "SSH and GPG keysページが表示される",
            "ssh -T git@github.com",
            "GitHubのSettings → SSH and GPG keysページを開く",
        )),
        Step::choice(
            "ssh-key-registration-gitlab",
            Phase::Repository,
            "GitLabにSSH鍵を登録します。\n\n**手順：**\n1. 公開鍵をコピー：\n```bash\ncat ~/.ssh/id_ed25519.pub\n```\n2. GitLabにログイン\n3. 右上のプロフィールアイコン → 「Preferences」\n4. 左メニューから「SSH Keys」を選択\n5. 「Key」に公開鍵を貼り付け\n6. 「Title」に任意の名前を入力（例: My Laptop）\n7. 「Add key」をクリック\n\n**確認：**\n```bash\nssh -T git@gitlab.com\n```\n上記コマンドで「Welcome to GitLab, @username!」と表示されれば成功です。\n\nSSH鍵の登録は完了しましたか？",
            &["登録完了", "エラーが発生", "確認が必要"],
        )
        .with_check_guide(ssh_registration_check_guide(
            "GitLabのPreferencesページにアクセスできる",
            "SSH Keysページが表示される",
            "ssh -T git@gitlab.com",
            "GitLabのPreferences → SSH Keysページを開く",
        )),
        Step::choice(
            "https-token-setup",
            Phase::Repository,
            "HTTPS認証用のトークンを設定します。\n\n**GitHubの場合：**\n1. GitHubにログイン\n2. 右上のプロフィールアイコン → 「Settings」\n3. 左メニューから「Developer settings」→「Personal access tokens」→「Tokens (classic)」\n4. 「Generate new token (classic)」をクリック\n5. Noteに用途を入力（例: Git操作用）\n6. スコープで「repo」にチェック\n7. 「Generate token」をクリック\n8. 表示されたトークンをコピー（再表示されないため注意）\n\n**GitLabの場合：**\n1. GitLabにログイン\n2. 右上のプロフィールアイコン → 「Preferences」\n3. 左メニューから「Access Tokens」を選択\n4. Token nameに用途を入力\n5. スコープで「write_repository」にチェック\n6. 「Create personal access token」をクリック\n7. 表示されたトークンをコピー\n\n**注意：**\n- トークンはパスワードの代わりに使用します\n- トークンは安全に保管してください\n\nトークンの作成は完了しましたか？",
            &["作成完了", "作成中", "エラーが発生"],
        ),
        Step::choice(
            "remote-setup",
            Phase::Repository,
            "リモートリポジトリを設定します。\n\n**SSH認証の場合：**\n```bash\ngit remote add origin git@github.com:username/repository-name.git\n# または\ngit remote add origin git@gitlab.com:username/repository-name.git\n```\n\n**HTTPS認証の場合：**\n```bash\ngit remote add origin https://github.com/username/repository-name.git\n# または\ngit remote add origin https://gitlab.com/username/repository-name.git\n```\n\n**プッシュ：**\n```bash\ngit push -u origin main\n```\n\nリモートリポジトリの設定は完了しましたか？",
            &["設定完了", "エラーが発生"],
        )
        .with_check_guide(CheckGuide {
            title: "リモートリポジトリ設定の確認ポイント".to_string(),
            check_points: vec![
                "リモートリポジトリURLが正しい（GitHub/GitLabのリポジトリページからコピー）".to_string(),
                "認証方法に応じたURL形式を使用（SSH: git@...、HTTPS: https://...）".to_string(),
                "リモートリポジトリが正しく追加されている".to_string(),
                "プッシュが成功している".to_string(),
            ],
            commands: vec![
                "git remote -v".to_string(),
                "git push -u origin main".to_string(),
                "git branch -a".to_string(),
            ],
            visual_guide: vec![
                "GitHub/GitLabのリポジトリページでURLを確認".to_string(),
                "「Code」ボタンからSSHまたはHTTPSのURLをコピー".to_string(),
                "ターミナルで `git remote -v` を実行して設定を確認".to_string(),
                "GitHub/GitLabのリポジトリページでコミットが表示されることを確認".to_string(),
            ],
        }),
    ]
}

fn ssh_registration_check_guide(
    settings_point: &str,
    page_point: &str,
    verify_command: &str,
    visual_first: &str,
) -> CheckGuide {
    CheckGuide {
        title: "SSH鍵登録の確認ポイント".to_string(),
        check_points: vec![
            "公開鍵が正しくコピーされている（ssh-ed25519で始まる）".to_string(),
            settings_point.to_string(),
            page_point.to_string(),
            "登録後、鍵が一覧に表示される".to_string(),
            "ssh -Tコマンドで認証成功メッセージが表示される".to_string(),
        ],
        commands: vec![
            "cat ~/.ssh/id_ed25519.pub".to_string(),
            verify_command.to_string(),
        ],
        visual_guide: vec![
            visual_first.to_string(),
            "登録した鍵が一覧に表示されているか確認".to_string(),
            "鍵のタイトルと登録日時を確認".to_string(),
        ],
    }
}

fn setup_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "git-install",
            Phase::Setup,
            "Gitのインストールを確認します。\n\n以下のコマンドを実行してください:\n```bash\ngit --version\n```",
            &["インストール済み", "インストールが必要"],
        ),
        Step::choice(
            "auth-setup",
            Phase::Setup,
            "認証情報を設定します。\n\n以下のコマンドを実行してください:\n```bash\ngit config --global user.name \"Your Name\"\ngit config --global user.email \"your.email@example.com\"\n```",
            &["設定完了", "エラーが発生"],
        ),
        Step::choice(
            "clone",
            Phase::Setup,
            "リポジトリをクローンします。\n\n以下のコマンドを実行してください:\n```bash\ngit clone <repository-url>\n```",
            &["クローン完了", "エラーが発生"],
        ),
    ]
}

fn verification_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "history-verification",
            Phase::Verification,
            "移行結果の検証を行います。\n\n**1. コミット履歴の確認**\n```bash\ngit log --oneline --all\n```\n\n**2. ブランチの確認**\n```bash\ngit branch -a\n```\n\n**3. タグの確認**\n```bash\ngit tag -l\n```\n\nすべての情報が正しく移行されていますか？",
            &["すべて正しく移行されている", "一部不完全", "確認が必要"],
        )
        .with_check_guide(CheckGuide {
            title: "移行結果の検証ポイント".to_string(),
            check_points: vec![
                "コミット履歴: すべてのコミットが表示される".to_string(),
                "ブランチ: すべてのブランチが表示される（リモートブランチ含む）".to_string(),
                "タグ: すべてのタグが表示される".to_string(),
                "コミットメッセージ: 元のSubversionのコミットメッセージが保持されている".to_string(),
                "コミット日時: 元の日時が正しく保持されている".to_string(),
            ],
            commands: vec![
                "git log --oneline --all".to_string(),
                "git branch -a".to_string(),
                "git tag -l".to_string(),
                "git log --graph --oneline --all".to_string(),
            ],
            visual_guide: vec![
                "ターミナルで各コマンドを実行".to_string(),
                "出力結果を確認".to_string(),
                "Subversionの情報と比較".to_string(),
                "不足している情報がないか確認".to_string(),
            ],
        }),
        Step::choice(
            "code-verification",
            Phase::Verification,
            "コードの整合性を確認します。\n\n**確認項目:**\n- ファイル構造が保持されているか\n- コードが正しく移行されているか\n- バイナリファイルが保持されているか\n\nコードの確認は完了しましたか？",
            &["確認完了、問題なし", "問題が見つかった", "確認が必要"],
        )
        .with_check_guide(CheckGuide {
            title: "コード整合性の確認ポイント".to_string(),
            check_points: vec![
                "ファイル構造: ディレクトリ構造がSubversionと同じ".to_string(),
                "ファイル数: ファイル数が一致している".to_string(),
                "コード内容: 主要なファイルの内容が同じ".to_string(),
                "バイナリファイル: 画像や実行ファイルが正しく保持されている".to_string(),
                "文字エンコーディング: 日本語などの文字が正しく表示される".to_string(),
            ],
            commands: vec![
                "find . -type f | wc -l".to_string(),
                "ls -la".to_string(),
                "git ls-files".to_string(),
            ],
            visual_guide: vec![
                "ファイルエクスプローラーでディレクトリ構造を確認".to_string(),
                "主要なファイルを開いて内容を確認".to_string(),
                "バイナリファイルが正しく存在するか確認".to_string(),
            ],
        }),
    ]
}

fn rules_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "rules-info",
            Phase::Rules,
            "運用ルールについて説明します。\n\n**重要なルール:**\n- Cherry-pickは禁止されています\n- マージコミットを使用してください\n- ブランチ名は feature/ または fix/ で始めてください\n- コミットメッセージは明確に記述してください",
            &["理解しました", "質問があります"],
        ),
    ]
}

fn rollout_steps() -> Vec<Step> {
    vec![
        Step::choice(
            "team-notification",
            Phase::Rollout,
            "チームメンバーへの通知を行います。\n\n**通知内容:**\n- GitリポジトリのURL\n- 移行完了日時\n- 新しい作業フロー\n- 移行スケジュール\n\nチームメンバーへの通知は完了しましたか？",
            &["通知完了", "これから通知する"],
        ),
        Step::choice(
            "svn-readonly",
            Phase::Rollout,
            "Subversionリポジトリを読み取り専用に設定します。\n\n**手順:**\n1. Subversionリポジトリの設定を変更\n2. 書き込み権限を削除\n3. 読み取り専用に設定\n\nSubversionリポジトリは読み取り専用になりましたか？",
            &["読み取り専用に設定済み", "これから設定する"],
        ),
        Step::choice(
            "migration-complete",
            Phase::Rollout,
            "🎉 SubversionからGitへの移行が完了しました！\n\n**次のステップ:**\n- チームメンバーがGitリポジトリをクローン\n- 新しい作業フローで開発を開始\n- Subversionリポジトリはアーカイブとして保持\n\n移行作業は完了しました。お疲れ様でした！",
            &["完了を確認"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenario::model::InputMode;
    use crate::session::AnswerBag;

    #[test]
    fn test_builtin_scenario_compiles() {
        let graph = builtin_scenario();
        assert_eq!(graph.phase_order().len(), 9);
        for phase in Phase::ORDER {
            assert!(!graph.steps_for(phase).is_empty(), "phase {} has steps", phase);
        }
    }

    #[test]
    fn test_entry_steps() {
        let graph = builtin_scenario();
        assert_eq!(graph.entry_step(Phase::Preparation).unwrap().id, "welcome");
        assert_eq!(
            graph.entry_step(Phase::Migration).unwrap().id,
            "migration-tool-selection"
        );
        assert_eq!(graph.entry_step(Phase::Rollout).unwrap().id, "team-notification");
    }

    #[test]
    fn test_repository_name_step_is_validated_free_text() {
        let graph = builtin_scenario();
        let step = graph.step_by_id("repository-name").unwrap();
        assert_eq!(step.input_mode, InputMode::FreeText);
        assert_eq!(step.validator, Some(RuleKind::Naming));
        assert_eq!(step.phase, Phase::Repository);
    }

    #[test]
    fn test_self_hosted_branch_skips_account_creation() {
        let graph = builtin_scenario();
        let mut answers = AnswerBag::default();
        answers.environment_type = Some(EnvironmentType::SelfHosted);
        let branch = graph
            .resolve_branch(
                Phase::Selection,
                "environment-selection",
                "B. セルフホスト版（社内サーバー）",
                &answers,
            )
            .unwrap();
        assert_eq!(branch.target, BranchTarget::Phase(Phase::Migration));
    }

    #[test]
    fn test_ssh_registration_branch_depends_on_environment() {
        let graph = builtin_scenario();

        let mut answers = AnswerBag::default();
        answers.environment_type = Some(EnvironmentType::Saas);
        let github = graph
            .resolve_branch(Phase::Repository, "ssh-key-generation", "生成完了", &answers)
            .unwrap();
        assert_eq!(
            github.target,
            BranchTarget::Step("ssh-key-registration-github".to_string())
        );

        answers.environment_type = Some(EnvironmentType::SelfHosted);
        let gitlab = graph
            .resolve_branch(Phase::Repository, "ssh-key-generation", "既に鍵がある", &answers)
            .unwrap();
        assert_eq!(
            gitlab.target,
            BranchTarget::Step("ssh-key-registration-gitlab".to_string())
        );
    }

    #[test]
    fn test_https_switch_takes_priority_over_registration() {
        let graph = builtin_scenario();
        let mut answers = AnswerBag::default();
        answers.environment_type = Some(EnvironmentType::Saas);
        let branch = graph
            .resolve_branch(
                Phase::Repository,
                "ssh-key-generation",
                "HTTPS認証に変更",
                &answers,
            )
            .unwrap();
        assert_eq!(branch.target, BranchTarget::Step("https-token-setup".to_string()));
    }

    #[test]
    fn test_trap_prone_steps_exist_in_scenario() {
        let graph = builtin_scenario();
        for id in [
            "svn-structure-check",
            "migration-execution",
            "ssh-key-generation",
            "https-token-setup",
            "remote-setup",
        ] {
            assert!(graph.step_by_id(id).is_some(), "step {} exists", id);
        }
    }
}
